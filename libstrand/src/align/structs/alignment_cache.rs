use crate::align::scoring::gap_run_score;
use crate::alphabet::GAP_SYMBOL;
use crate::structs::Sequence;
use crate::util::VecUtils;

use super::{AlignStep, Alignment};

/// The optimal score of a suffix pair and the first column of its alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheEntry {
    pub score: isize,
    pub step: AlignStep,
}

impl CacheEntry {
    pub fn new(score: isize, step: AlignStep) -> Self {
        Self { score, step }
    }

    /// Take the candidate only if it scores strictly higher,
    /// so the candidate that was offered first wins a tie.
    #[inline]
    pub fn promote(&mut self, score: isize, step: AlignStep) {
        if self.score < score {
            self.score = score;
            self.step = step;
        }
    }
}

/// Memoized optimal alignments of suffix pairs, scoped to one alignment of two sequences.
///
/// A suffix pair is keyed by `(seq_1_start, seq_2_start)`, the 1-based residue
/// positions where the two suffixes begin. Only pairs of non-empty suffixes are
/// stored; the alignment of an empty suffix is all blanks and is never cached.
#[derive(Default, Clone, Debug)]
pub struct AlignmentCache {
    pub seq_1_length: usize,
    pub seq_2_length: usize,
    /// The cache entries as a flat vector.
    ///
    /// It's stored in the following pattern:
    ///
    /// ```text
    ///     [
    ///
    ///         e_(0, 0), e_(0, 1), ..., e_(0, L2),
    ///         ...
    ///         e_(L1, 0), e_(L1, 1), ..., e_(L1, L2)
    ///
    ///     ]
    /// ```
    ///
    /// where:
    ///
    /// ```text
    ///     L1:       <seq_1_length>
    ///     L2:       <seq_2_length>
    ///     e_(i, j): the entry for the suffixes starting at seq_1[i] and seq_2[j]
    /// ```
    ///
    /// Row 0 and column 0 are never filled, mirroring the padding byte of a `Sequence`.
    entries: Vec<Option<CacheEntry>>,
    num_entries: usize,
}

impl AlignmentCache {
    pub fn new(seq_1_length: usize, seq_2_length: usize) -> Self {
        Self {
            seq_1_length,
            seq_2_length,
            entries: vec![None; (seq_1_length + 1) * (seq_2_length + 1)],
            num_entries: 0,
        }
    }

    pub fn for_sequences(seq_1: &Sequence, seq_2: &Sequence) -> Self {
        Self::new(seq_1.length, seq_2.length)
    }

    /// Empty the cache and size it for a new pair of sequences.
    pub fn reuse(&mut self, new_seq_1_length: usize, new_seq_2_length: usize) {
        self.seq_1_length = new_seq_1_length;
        self.seq_2_length = new_seq_2_length;
        self.entries
            .resize_and_reset((new_seq_1_length + 1) * (new_seq_2_length + 1), None);
        self.num_entries = 0;
    }

    pub fn reset(&mut self) {
        self.entries.reset(None);
        self.num_entries = 0;
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.seq_1_length, self.seq_2_length)
    }

    /// The number of suffix pairs that have been stored.
    pub fn num_entries(&self) -> usize {
        self.num_entries
    }

    /// The fraction of all non-empty suffix pairs that have been stored.
    pub fn fill_fraction(&self) -> f32 {
        let num_pairs = self.seq_1_length * self.seq_2_length;
        if num_pairs == 0 {
            0.0
        } else {
            self.num_entries as f32 / num_pairs as f32
        }
    }

    #[inline]
    fn index(&self, seq_1_start: usize, seq_2_start: usize) -> usize {
        seq_1_start * (self.seq_2_length + 1) + seq_2_start
    }

    #[inline]
    pub fn get(&self, seq_1_start: usize, seq_2_start: usize) -> Option<CacheEntry> {
        debug_assert!(seq_1_start >= 1);
        debug_assert!(seq_2_start >= 1);
        if seq_1_start > self.seq_1_length || seq_2_start > self.seq_2_length {
            return None;
        }
        self.entries[self.index(seq_1_start, seq_2_start)]
    }

    #[inline]
    pub fn set(&mut self, seq_1_start: usize, seq_2_start: usize, entry: CacheEntry) {
        debug_assert!(seq_1_start >= 1 && seq_1_start <= self.seq_1_length);
        debug_assert!(seq_2_start >= 1 && seq_2_start <= self.seq_2_length);
        let idx = self.index(seq_1_start, seq_2_start);
        if self.entries[idx].replace(entry).is_none() {
            self.num_entries += 1;
        }
    }

    pub fn contains(&self, seq_1_start: usize, seq_2_start: usize) -> bool {
        self.get(seq_1_start, seq_2_start).is_some()
    }

    /// Rebuild the optimal alignment of the suffix pair starting at
    /// `(seq_1_start, seq_2_start)` by following the stored steps.
    ///
    /// Pairs with an empty suffix are always available. Pairs of non-empty
    /// suffixes produce `None` if they were never visited.
    pub fn alignment(
        &self,
        seq_1: &Sequence,
        seq_2: &Sequence,
        seq_1_start: usize,
        seq_2_start: usize,
    ) -> Option<Alignment> {
        debug_assert_eq!(seq_1.length, self.seq_1_length);
        debug_assert_eq!(seq_2.length, self.seq_2_length);

        let seq_1_remaining = (self.seq_1_length + 1).checked_sub(seq_1_start)?;
        let seq_2_remaining = (self.seq_2_length + 1).checked_sub(seq_2_start)?;

        let score = if seq_1_remaining == 0 || seq_2_remaining == 0 {
            gap_run_score(seq_1_remaining + seq_2_remaining)
        } else {
            self.get(seq_1_start, seq_2_start)?.score
        };

        let mut alignment = Alignment::with_capacity(score, seq_1_remaining + seq_2_remaining);
        let mut seq_1_idx = seq_1_start;
        let mut seq_2_idx = seq_2_start;

        while seq_1_idx <= self.seq_1_length && seq_2_idx <= self.seq_2_length {
            let step = self.get(seq_1_idx, seq_2_idx)?.step;
            match step {
                AlignStep::Pair => alignment
                    .push_column(seq_1.utf8_bytes[seq_1_idx], seq_2.utf8_bytes[seq_2_idx]),
                AlignStep::GapInSeq1 => {
                    alignment.push_column(GAP_SYMBOL, seq_2.utf8_bytes[seq_2_idx])
                }
                AlignStep::GapInSeq2 => {
                    alignment.push_column(seq_1.utf8_bytes[seq_1_idx], GAP_SYMBOL)
                }
            }
            let (seq_1_advance, seq_2_advance) = step.advance();
            seq_1_idx += seq_1_advance;
            seq_2_idx += seq_2_advance;
        }

        while seq_1_idx <= self.seq_1_length {
            alignment.push_column(seq_1.utf8_bytes[seq_1_idx], GAP_SYMBOL);
            seq_1_idx += 1;
        }

        while seq_2_idx <= self.seq_2_length {
            alignment.push_column(GAP_SYMBOL, seq_2.utf8_bytes[seq_2_idx]);
            seq_2_idx += 1;
        }

        Some(alignment)
    }
}
