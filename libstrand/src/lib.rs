//! Optimal global alignment of two sequences by memoized recursion.
//!
//! Matches score +1, mismatches -1, and each residue aligned to a blank -2.
//!
//! ```
//! use libstrand::align::align;
//! use libstrand::alphabet::Alphabet;
//! use libstrand::structs::Sequence;
//!
//! let seq_1 = Sequence::from_utf8(Alphabet::Dna, b"ACGT")?;
//! let seq_2 = Sequence::from_utf8(Alphabet::Dna, b"AGT")?;
//! let alignment = align(&seq_1, &seq_2)?;
//!
//! assert_eq!(alignment.aligned_1, "ACGT");
//! assert_eq!(alignment.aligned_2, "A GT");
//! assert_eq!(alignment.score, 1);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod align;
pub mod alphabet;
pub mod generate;
pub mod output;
pub mod structs;
pub mod util;
