use serde::{Deserialize, Serialize};

use crate::align::scoring::{GAP_SCORE, MATCH_SCORE, MISMATCH_SCORE};
use crate::alphabet::GAP_SYMBOL;

/// The classification of a single column of an alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignedColumn {
    Match,
    Mismatch,
    /// Exactly one side of the column is a blank.
    Gap,
}

impl AlignedColumn {
    pub fn classify(seq_1_byte: u8, seq_2_byte: u8) -> Self {
        debug_assert!(!(seq_1_byte == GAP_SYMBOL && seq_2_byte == GAP_SYMBOL));

        if seq_1_byte == GAP_SYMBOL || seq_2_byte == GAP_SYMBOL {
            AlignedColumn::Gap
        } else if seq_1_byte.eq_ignore_ascii_case(&seq_2_byte) {
            AlignedColumn::Match
        } else {
            AlignedColumn::Mismatch
        }
    }

    pub fn score(&self) -> isize {
        match self {
            AlignedColumn::Match => MATCH_SCORE,
            AlignedColumn::Mismatch => MISMATCH_SCORE,
            AlignedColumn::Gap => GAP_SCORE,
        }
    }
}

/// An optimal global alignment of two sequences.
///
/// `aligned_1` and `aligned_2` always have the same length. Removing the
/// blanks from either one produces the corresponding input sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alignment {
    /// The residues of seq_1, interleaved with blanks
    pub aligned_1: String,
    /// The residues of seq_2, interleaved with blanks
    pub aligned_2: String,
    /// The sum of the column scores
    pub score: isize,
}

impl Alignment {
    pub(crate) fn with_capacity(score: isize, capacity: usize) -> Self {
        Self {
            aligned_1: String::with_capacity(capacity),
            aligned_2: String::with_capacity(capacity),
            score,
        }
    }

    pub(crate) fn push_column(&mut self, seq_1_byte: u8, seq_2_byte: u8) {
        self.aligned_1.push(char::from(seq_1_byte));
        self.aligned_2.push(char::from(seq_2_byte));
    }

    /// The number of columns in the alignment.
    pub fn length(&self) -> usize {
        debug_assert_eq!(self.aligned_1.len(), self.aligned_2.len());
        self.aligned_1.len()
    }

    pub fn column(&self, idx: usize) -> AlignedColumn {
        AlignedColumn::classify(self.aligned_1.as_bytes()[idx], self.aligned_2.as_bytes()[idx])
    }

    pub fn columns(&self) -> impl Iterator<Item = AlignedColumn> + '_ {
        self.aligned_1
            .bytes()
            .zip(self.aligned_2.bytes())
            .map(|(a, b)| AlignedColumn::classify(a, b))
    }

    pub fn count(&self, kind: AlignedColumn) -> usize {
        self.columns().filter(|c| *c == kind).count()
    }

    /// Recompute the score from the columns.
    pub fn rescore(&self) -> isize {
        self.columns().map(|c| c.score()).sum()
    }

    /// The aligned seq_1 residues with the blanks removed.
    pub fn ungapped_1(&self) -> String {
        self.aligned_1.chars().filter(|&c| c != GAP_SYMBOL as char).collect()
    }

    /// The aligned seq_2 residues with the blanks removed.
    pub fn ungapped_2(&self) -> String {
        self.aligned_2.chars().filter(|&c| c != GAP_SYMBOL as char).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    fn alignment(aligned_1: &str, aligned_2: &str) -> Alignment {
        let mut ali = Alignment::with_capacity(0, aligned_1.len());
        aligned_1
            .bytes()
            .zip(aligned_2.bytes())
            .for_each(|(a, b)| ali.push_column(a, b));
        ali.score = ali.rescore();
        ali
    }

    #[test]
    fn test_columns() {
        let ali = alignment("AC GT", "AGTG ");

        check!(ali.length() == 5);
        check!(ali.column(0) == AlignedColumn::Match);
        check!(ali.column(1) == AlignedColumn::Mismatch);
        check!(ali.column(2) == AlignedColumn::Gap);
        check!(ali.column(4) == AlignedColumn::Gap);
        check!(ali.count(AlignedColumn::Match) == 1);
        check!(ali.count(AlignedColumn::Mismatch) == 2);
        check!(ali.count(AlignedColumn::Gap) == 2);
        check!(ali.score == 1 - 1 - 2 - 1 - 2);
    }

    #[test]
    fn test_case_insensitive_match() {
        check!(AlignedColumn::classify(b'a', b'A') == AlignedColumn::Match);
    }

    #[test]
    fn test_ungapped() {
        let ali = alignment("A CG", "AT G");
        check!(ali.ungapped_1() == "ACG");
        check!(ali.ungapped_2() == "ATG");
    }

    #[test]
    fn test_json_uses_plain_strings() -> anyhow::Result<()> {
        let ali = alignment("A C", "ATC");
        let json = serde_json::to_string(&ali)?;
        check!(json == r#"{"aligned_1":"A C","aligned_2":"ATC","score":0}"#);

        let back: Alignment = serde_json::from_str(&json)?;
        check!(back == ali);
        Ok(())
    }
}
