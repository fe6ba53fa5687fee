pub mod structs;

pub mod scoring;

mod preconditions;
pub use preconditions::{AlphabetMismatchError, CacheDimensionError};

mod memoized;
pub use memoized::{align, align_with_cache};

mod bottom_up;
pub use bottom_up::align_bottom_up;

pub mod naive;
pub use naive::align_exhaustive;
