pub const MATCH_SCORE: isize = 1;
pub const MISMATCH_SCORE: isize = -1;
pub const GAP_SCORE: isize = -2;

/// The score of aligning two residues against each other.
#[inline(always)]
pub fn pair_score(seq_1_residue: u8, seq_2_residue: u8) -> isize {
    if seq_1_residue == seq_2_residue {
        MATCH_SCORE
    } else {
        MISMATCH_SCORE
    }
}

/// The score of aligning `length` residues against blanks.
#[inline(always)]
pub fn gap_run_score(length: usize) -> isize {
    GAP_SCORE * length as isize
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pair_score() {
        assert_eq!(pair_score(2, 2), 1);
        assert_eq!(pair_score(2, 3), -1);
    }

    #[test]
    fn test_gap_run_score() {
        assert_eq!(gap_run_score(0), 0);
        assert_eq!(gap_run_score(3), -6);
    }
}
