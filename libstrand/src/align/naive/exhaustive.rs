use crate::align::preconditions::check_alphabets;
use crate::align::scoring::{gap_run_score, pair_score, GAP_SCORE};
use crate::align::structs::Alignment;
use crate::alphabet::GAP_SYMBOL;
use crate::structs::Sequence;

/// The alignment of two suffixes, built back to front.
struct ReversedAlignment {
    score: isize,
    columns: Vec<(u8, u8)>,
}

fn suffix_alignment(
    seq_1: &Sequence,
    seq_2: &Sequence,
    seq_1_start: usize,
    seq_2_start: usize,
) -> ReversedAlignment {
    if seq_1_start > seq_1.length {
        return ReversedAlignment {
            score: gap_run_score(seq_2.length + 1 - seq_2_start),
            columns: (seq_2_start..=seq_2.length)
                .rev()
                .map(|idx| (GAP_SYMBOL, seq_2.utf8_bytes[idx]))
                .collect(),
        };
    }

    if seq_2_start > seq_2.length {
        return ReversedAlignment {
            score: gap_run_score(seq_1.length + 1 - seq_1_start),
            columns: (seq_1_start..=seq_1.length)
                .rev()
                .map(|idx| (seq_1.utf8_bytes[idx], GAP_SYMBOL))
                .collect(),
        };
    }

    let seq_1_byte = seq_1.utf8_bytes[seq_1_start];
    let seq_2_byte = seq_2.utf8_bytes[seq_2_start];

    let mut best = suffix_alignment(seq_1, seq_2, seq_1_start + 1, seq_2_start + 1);
    best.columns.push((seq_1_byte, seq_2_byte));

    let seq_1_head = seq_1.digital_bytes[seq_1_start];
    let seq_2_head = seq_2.digital_bytes[seq_2_start];
    best.score += pair_score(seq_1_head, seq_2_head);

    if seq_1_head == seq_2_head {
        return best;
    }

    let mut gap_in_seq_1 = suffix_alignment(seq_1, seq_2, seq_1_start, seq_2_start + 1);
    gap_in_seq_1.score += GAP_SCORE;
    if best.score < gap_in_seq_1.score {
        gap_in_seq_1.columns.push((GAP_SYMBOL, seq_2_byte));
        best = gap_in_seq_1;
    }

    let mut gap_in_seq_2 = suffix_alignment(seq_1, seq_2, seq_1_start + 1, seq_2_start);
    gap_in_seq_2.score += GAP_SCORE;
    if best.score < gap_in_seq_2.score {
        gap_in_seq_2.columns.push((seq_1_byte, GAP_SYMBOL));
        best = gap_in_seq_2;
    }

    best
}

/// Compute an optimal alignment by exploring the full three-way recursion
/// without memoization.
///
/// This takes exponential time and exists as a reference for the memoized
/// aligners; it makes the same choices, including on ties.
pub fn align_exhaustive(seq_1: &Sequence, seq_2: &Sequence) -> anyhow::Result<Alignment> {
    check_alphabets(seq_1, seq_2)?;

    let reversed = suffix_alignment(seq_1, seq_2, 1, 1);

    let mut alignment = Alignment::with_capacity(reversed.score, reversed.columns.len());
    reversed
        .columns
        .iter()
        .rev()
        .for_each(|&(seq_1_byte, seq_2_byte)| alignment.push_column(seq_1_byte, seq_2_byte));

    Ok(alignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;
    use assert2::check;

    #[test]
    fn test_exhaustive_small_cases() -> anyhow::Result<()> {
        let cases = [
            ("", "ATG", "   ", "ATG", -6),
            ("ATG", "", "ATG", "   ", -6),
            ("ATG", "ATG", "ATG", "ATG", 3),
            ("A", "CC", "A ", "CC", -3),
            ("ACA", "CAC", " ACA", "CAC ", -2),
            ("ACGT", "AGT", "ACGT", "A GT", 1),
        ];

        for (residues_1, residues_2, aligned_1, aligned_2, score) in cases {
            let seq_1 = Sequence::from_utf8(Alphabet::Dna, residues_1.as_bytes())?;
            let seq_2 = Sequence::from_utf8(Alphabet::Dna, residues_2.as_bytes())?;
            let ali = align_exhaustive(&seq_1, &seq_2)?;

            check!(ali.aligned_1 == aligned_1);
            check!(ali.aligned_2 == aligned_2);
            check!(ali.score == score);
        }
        Ok(())
    }
}
