use anyhow::Context;
use log::debug;

use super::preconditions::check_inputs;
use super::scoring::{gap_run_score, pair_score, GAP_SCORE};
use super::structs::{AlignStep, Alignment, AlignmentCache, CacheEntry};
use crate::structs::Sequence;

/// The memoized recursion over suffix pairs of two sequences.
struct SuffixAligner<'a> {
    seq_1: &'a Sequence,
    seq_2: &'a Sequence,
    cache: &'a mut AlignmentCache,
}

impl SuffixAligner<'_> {
    /// The optimal score of aligning the suffixes that start at
    /// `seq_1_start` and `seq_2_start`, filling in the cache on the way.
    fn suffix_score(&mut self, seq_1_start: usize, seq_2_start: usize) -> isize {
        if let Some(entry) = self.cache.get(seq_1_start, seq_2_start) {
            return entry.score;
        }

        if seq_1_start > self.seq_1.length {
            return gap_run_score(self.seq_2.length + 1 - seq_2_start);
        }

        if seq_2_start > self.seq_2.length {
            return gap_run_score(self.seq_1.length + 1 - seq_1_start);
        }

        let seq_1_head = self.seq_1.digital_bytes[seq_1_start];
        let seq_2_head = self.seq_2.digital_bytes[seq_2_start];

        // the leading residues are forced to align to each other
        let rest_score = self.suffix_score(seq_1_start + 1, seq_2_start + 1);

        let mut best = CacheEntry::new(
            rest_score + pair_score(seq_1_head, seq_2_head),
            AlignStep::Pair,
        );

        if seq_1_head == seq_2_head {
            // inserting a gap never improves on a match
            self.cache.set(seq_1_start, seq_2_start, best);
            return best.score;
        }

        let gap_in_seq_1_score = self.suffix_score(seq_1_start, seq_2_start + 1) + GAP_SCORE;
        best.promote(gap_in_seq_1_score, AlignStep::GapInSeq1);

        let gap_in_seq_2_score = self.suffix_score(seq_1_start + 1, seq_2_start) + GAP_SCORE;
        best.promote(gap_in_seq_2_score, AlignStep::GapInSeq2);

        self.cache.set(seq_1_start, seq_2_start, best);
        best.score
    }
}

/// Compute an optimal global alignment of `seq_1` and `seq_2` by memoized
/// recursion over their suffix pairs, storing every visited pair in `cache`.
///
/// The cache must be sized for the two sequences and should be empty; an entry
/// that is already present is trusted as the optimal alignment of its suffix pair.
///
/// When two choices for the first column of a suffix pair score the same, the
/// pairing of the two leading residues wins, then a blank in seq_1, then a
/// blank in seq_2.
///
/// The recursion can reach a depth of `seq_1.length + seq_2.length`; use
/// [`align_bottom_up`](super::align_bottom_up) for long sequences.
pub fn align_with_cache(
    seq_1: &Sequence,
    seq_2: &Sequence,
    cache: &mut AlignmentCache,
) -> anyhow::Result<Alignment> {
    check_inputs(seq_1, seq_2, cache)?;

    let mut aligner = SuffixAligner {
        seq_1,
        seq_2,
        cache,
    };
    aligner.suffix_score(1, 1);

    debug!(
        "memoized alignment of ({}, {}) residues filled {} suffix pairs",
        seq_1.length,
        seq_2.length,
        cache.num_entries()
    );

    cache
        .alignment(seq_1, seq_2, 1, 1)
        .context("alignment cache is missing a visited suffix pair")
}

/// Compute an optimal global alignment of `seq_1` and `seq_2` with a fresh cache.
pub fn align(seq_1: &Sequence, seq_2: &Sequence) -> anyhow::Result<Alignment> {
    let mut cache = AlignmentCache::for_sequences(seq_1, seq_2);
    align_with_cache(seq_1, seq_2, &mut cache)
}
