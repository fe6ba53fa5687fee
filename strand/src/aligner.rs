use libstrand::align::structs::{Alignment, AlignmentCache};
use libstrand::align::{align_bottom_up, align_with_cache};
use libstrand::structs::Sequence;
use log::debug;

use crate::args::AlignerArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Memoized,
    BottomUp,
}

pub struct AlignOutcome {
    pub alignment: Alignment,
    pub strategy: Strategy,
    /// The number of suffix pairs stored in the cache
    pub suffix_pairs: usize,
}

impl AlignerArgs {
    pub fn strategy(&self, seq_1: &Sequence, seq_2: &Sequence) -> Strategy {
        if self.bottom_up || seq_1.length + seq_2.length > self.max_recursion_length {
            Strategy::BottomUp
        } else {
            Strategy::Memoized
        }
    }

    /// Align two sequences with a cache that lives only for this call.
    pub fn align(&self, seq_1: &Sequence, seq_2: &Sequence) -> anyhow::Result<AlignOutcome> {
        let strategy = self.strategy(seq_1, seq_2);
        let mut cache = AlignmentCache::for_sequences(seq_1, seq_2);

        let alignment = match strategy {
            Strategy::Memoized => align_with_cache(seq_1, seq_2, &mut cache)?,
            Strategy::BottomUp => align_bottom_up(seq_1, seq_2, &mut cache)?,
        };

        debug!(
            "{strategy:?} alignment: score {}, {} columns, {:.1}% of suffix pairs visited",
            alignment.score,
            alignment.length(),
            cache.fill_fraction() * 100.0
        );

        Ok(AlignOutcome {
            alignment,
            strategy,
            suffix_pairs: cache.num_entries(),
        })
    }
}
