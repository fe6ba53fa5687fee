use serde::{Deserialize, Serialize};

/// The first column of an optimal alignment of a suffix pair.
///
/// Following the steps stored in an [`AlignmentCache`](super::AlignmentCache)
/// from a suffix pair rebuilds the full alignment of that pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlignStep {
    /// The leading residues of both suffixes are aligned to each other.
    Pair,
    /// The leading residue of seq_2 is aligned to a blank in seq_1.
    GapInSeq1,
    /// The leading residue of seq_1 is aligned to a blank in seq_2.
    GapInSeq2,
}

impl AlignStep {
    /// The number of (seq_1, seq_2) residues the step consumes.
    pub fn advance(&self) -> (usize, usize) {
        match self {
            AlignStep::Pair => (1, 1),
            AlignStep::GapInSeq1 => (0, 1),
            AlignStep::GapInSeq2 => (1, 0),
        }
    }
}
