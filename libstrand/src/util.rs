use std::cmp::Ordering::{Equal, Greater, Less};

#[cfg(test)]
#[ctor::ctor]
fn init_backtrace() {
    color_backtrace::install();
}

pub trait VecUtils<T>
where
    T: Clone,
{
    fn reset(&mut self, value: T);
    fn resize_and_reset(&mut self, new_len: usize, value: T);
}

impl<T> VecUtils<T> for Vec<T>
where
    T: Clone,
{
    fn reset(&mut self, value: T) {
        self.iter_mut().for_each(|v| *v = value.clone());
    }

    fn resize_and_reset(&mut self, new_len: usize, value: T) {
        match new_len.cmp(&self.len()) {
            Less => {
                self.truncate(new_len);
                self.iter_mut().for_each(|v| *v = value.clone());
            }
            Equal => self.iter_mut().for_each(|v| *v = value.clone()),
            Greater => {
                self.iter_mut().for_each(|v| *v = value.clone());
                self.resize(new_len, value);
            }
        }
    }
}
