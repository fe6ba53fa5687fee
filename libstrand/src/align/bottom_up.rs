use anyhow::Context;
use log::debug;

use super::preconditions::check_inputs;
use super::scoring::{gap_run_score, pair_score, GAP_SCORE};
use super::structs::{AlignStep, Alignment, AlignmentCache, CacheEntry};
use crate::structs::Sequence;

/// The optimal score of a suffix pair whose entry is already in the cache,
/// or whose alignment is all blanks.
#[inline]
fn filled_score(
    cache: &AlignmentCache,
    seq_1_start: usize,
    seq_2_start: usize,
) -> Option<isize> {
    if seq_1_start > cache.seq_1_length {
        Some(gap_run_score(cache.seq_2_length + 1 - seq_2_start))
    } else if seq_2_start > cache.seq_2_length {
        Some(gap_run_score(cache.seq_1_length + 1 - seq_1_start))
    } else {
        cache.get(seq_1_start, seq_2_start).map(|e| e.score)
    }
}

/// Compute the same alignment as [`align_with_cache`](super::align_with_cache)
/// without recursion.
///
/// Suffix pairs are filled from the shortest suffixes upward, so every pair
/// a choice depends on is filled before the choice is made. Unlike the
/// recursion, every suffix pair ends up in the cache.
pub fn align_bottom_up(
    seq_1: &Sequence,
    seq_2: &Sequence,
    cache: &mut AlignmentCache,
) -> anyhow::Result<Alignment> {
    check_inputs(seq_1, seq_2, cache)?;

    for seq_1_start in (1..=seq_1.length).rev() {
        let seq_1_head = seq_1.digital_bytes[seq_1_start];

        for seq_2_start in (1..=seq_2.length).rev() {
            if cache.contains(seq_1_start, seq_2_start) {
                continue;
            }

            let seq_2_head = seq_2.digital_bytes[seq_2_start];

            let rest_score = filled_score(cache, seq_1_start + 1, seq_2_start + 1)
                .context("suffix pair filled out of order")?;

            let pair = CacheEntry::new(
                rest_score + pair_score(seq_1_head, seq_2_head),
                AlignStep::Pair,
            );

            let entry = if seq_1_head == seq_2_head {
                pair
            } else {
                let gap_in_seq_1_score = filled_score(cache, seq_1_start, seq_2_start + 1)
                    .context("suffix pair filled out of order")?
                    + GAP_SCORE;
                let gap_in_seq_2_score = filled_score(cache, seq_1_start + 1, seq_2_start)
                    .context("suffix pair filled out of order")?
                    + GAP_SCORE;

                let mut best = pair;
                best.promote(gap_in_seq_1_score, AlignStep::GapInSeq1);
                best.promote(gap_in_seq_2_score, AlignStep::GapInSeq2);
                best
            };

            cache.set(seq_1_start, seq_2_start, entry);
        }
    }

    debug!(
        "bottom-up alignment of ({}, {}) residues filled {} suffix pairs",
        seq_1.length,
        seq_2.length,
        cache.num_entries()
    );

    cache
        .alignment(seq_1, seq_2, 1, 1)
        .context("alignment cache is missing a filled suffix pair")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::align_with_cache;
    use crate::alphabet::Alphabet;
    use crate::generate::random_sequence;

    use assert2::check;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn test_bottom_up_matches_recursion() -> anyhow::Result<()> {
        let mut rng = Pcg64::seed_from_u64(42);
        for _ in 0..100 {
            let seq_1 = random_sequence(Alphabet::Dna, 1, 60, &mut rng)?;
            let seq_2 = random_sequence(Alphabet::Dna, 1, 60, &mut rng)?;

            let mut recursive_cache = AlignmentCache::for_sequences(&seq_1, &seq_2);
            let recursive = align_with_cache(&seq_1, &seq_2, &mut recursive_cache)?;

            let mut bottom_up_cache = AlignmentCache::for_sequences(&seq_1, &seq_2);
            let bottom_up = align_bottom_up(&seq_1, &seq_2, &mut bottom_up_cache)?;

            check!(recursive == bottom_up);

            // every pair the recursion visited agrees with the full table
            for i in 1..=seq_1.length {
                for j in 1..=seq_2.length {
                    if let Some(entry) = recursive_cache.get(i, j) {
                        check!(bottom_up_cache.get(i, j) == Some(entry));
                    }
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_bottom_up_fills_every_pair() -> anyhow::Result<()> {
        let seq_1 = Sequence::from_utf8(Alphabet::Dna, b"ACGTTGCA")?;
        let seq_2 = Sequence::from_utf8(Alphabet::Dna, b"TTGCA")?;
        let mut cache = AlignmentCache::for_sequences(&seq_1, &seq_2);
        align_bottom_up(&seq_1, &seq_2, &mut cache)?;

        check!(cache.num_entries() == seq_1.length * seq_2.length);
        check!(cache.fill_fraction() == 1.0);
        Ok(())
    }

    #[test]
    fn test_bottom_up_empty_sequences() -> anyhow::Result<()> {
        let seq_1 = Sequence::from_utf8(Alphabet::Dna, b"")?;
        let seq_2 = Sequence::from_utf8(Alphabet::Dna, b"ATG")?;
        let mut cache = AlignmentCache::for_sequences(&seq_1, &seq_2);
        let ali = align_bottom_up(&seq_1, &seq_2, &mut cache)?;

        check!(ali.score == -6);
        check!(ali.aligned_1 == "   ");
        check!(ali.aligned_2 == "ATG");
        Ok(())
    }

    #[test]
    fn test_bottom_up_long_sequences() -> anyhow::Result<()> {
        let mut rng = Pcg64::seed_from_u64(5);
        let seq_1 = random_sequence(Alphabet::Dna, 1500, 1500, &mut rng)?;
        let seq_2 = random_sequence(Alphabet::Dna, 1500, 1500, &mut rng)?;
        let mut cache = AlignmentCache::for_sequences(&seq_1, &seq_2);
        let ali = align_bottom_up(&seq_1, &seq_2, &mut cache)?;

        check!(ali.rescore() == ali.score);
        check!(ali.ungapped_1() == seq_1.residues());
        Ok(())
    }
}
