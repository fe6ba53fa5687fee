use seq_io::fasta::{Reader, Record};
use std::fmt::{Debug, Display, Formatter};
use std::path::Path;

use crate::alphabet::{Alphabet, UTF8_SPACE};
use anyhow::{Context, Result};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("unknown UTF8 sequence byte for {alphabet} alphabet: {byte}")]
pub struct UnknownUtf8SequenceByteError {
    alphabet: Alphabet,
    byte: u8,
}

#[derive(Error, Debug)]
#[error("unknown digital sequence byte for {alphabet} alphabet: {byte}")]
pub struct UnknownDigitalSequenceByteError {
    alphabet: Alphabet,
    byte: u8,
}

/// This holds the both the "digital" data and string data of a biological sequence.
#[derive(Clone, PartialEq, Eq)]
pub struct Sequence {
    /// The name of the sequence
    pub name: String,
    /// The sequence details. If the sequence comes from a fasta, this
    /// is the information following the sequence name in the header
    pub details: Option<String>,
    /// The alphabet the residues are drawn from
    pub alphabet: Alphabet,
    /// The length of the sequence
    pub length: usize,
    /// The "digital" data of the sequence. These are
    /// the string bytes, mapped through the alphabet
    pub digital_bytes: Vec<u8>,
    /// The string data of the sequence. These are the UTF8 bytes
    /// that make up the sequence in the "normal" alphabet
    pub utf8_bytes: Vec<u8>,
}

impl Sequence {
    pub fn from_fasta<P: AsRef<Path>>(alphabet: Alphabet, path: P) -> Result<Vec<Self>> {
        let mut seqs: Vec<Self> = vec![];

        let mut reader = Reader::from_path(&path).with_context(|| {
            format!(
                "failed to open fasta file: {}",
                path.as_ref().to_string_lossy()
            )
        })?;

        while let Some(record) = reader.next() {
            let record = record.with_context(|| "failed to read fasta record")?;
            let mut header_bytes = record.head().to_vec();
            let first_space_idx = header_bytes.iter().position(|&b| b == UTF8_SPACE);

            let error_context: fn() -> &'static str =
                || "failed to create String from fasta header bytes";

            let (name, details) = match first_space_idx {
                Some(idx) => {
                    let details_bytes = header_bytes.split_off(idx + 1);
                    header_bytes.pop();
                    (
                        String::from_utf8(header_bytes).with_context(error_context)?,
                        Some(String::from_utf8(details_bytes).with_context(error_context)?),
                    )
                }
                None => (
                    String::from_utf8(header_bytes).with_context(error_context)?,
                    None,
                ),
            };

            let residues: Vec<u8> = record.seq_lines().flatten().copied().collect();
            let mut seq = Self::from_utf8(alphabet, &residues)
                .with_context(|| format!("failed to parse fasta record: {name}"))?;
            seq.name = name;
            seq.details = details;

            seqs.push(seq);
        }
        Ok(seqs)
    }

    pub fn from_digital(alphabet: Alphabet, bytes: &[u8]) -> Result<Self> {
        // We want position 1 of the sequence to be at index 1, so we'll buffer with 255
        let mut digital_bytes: Vec<u8> = vec![255; bytes.len() + 1];
        digital_bytes[1..].copy_from_slice(bytes);
        let mut utf8_bytes: Vec<u8> = vec![255; digital_bytes.len()];

        for (idx, digital_byte) in digital_bytes[1..].iter().enumerate() {
            let utf8_byte = match alphabet.digital_to_utf8().get(digital_byte) {
                Some(b) => *b,
                None => {
                    return Err(UnknownDigitalSequenceByteError {
                        alphabet,
                        byte: *digital_byte,
                    }
                    .into())
                }
            };
            utf8_bytes[idx + 1] = utf8_byte;
        }

        Ok(Sequence {
            name: "".to_string(),
            details: None,
            alphabet,
            length: utf8_bytes.len() - 1,
            digital_bytes,
            utf8_bytes,
        })
    }

    pub fn from_utf8(alphabet: Alphabet, bytes: &[u8]) -> Result<Self> {
        let mut utf8_bytes: Vec<u8> = vec![255; bytes.len() + 1];
        utf8_bytes[1..].copy_from_slice(bytes);
        let mut digital_bytes: Vec<u8> = vec![255; utf8_bytes.len()];

        for (idx, utf8_byte) in utf8_bytes[1..].iter().enumerate() {
            let digital_byte = match alphabet.utf8_to_digital().get(utf8_byte) {
                Some(b) => *b,
                None => {
                    return Err(UnknownUtf8SequenceByteError {
                        alphabet,
                        byte: *utf8_byte,
                    }
                    .into())
                }
            };
            digital_bytes[idx + 1] = digital_byte;
        }

        Ok(Sequence {
            name: "".to_string(),
            details: None,
            alphabet,
            length: digital_bytes.len() - 1,
            digital_bytes,
            utf8_bytes,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The UTF8 residues of the suffix that starts at the 1-based position `start`.
    ///
    /// A `start` of `length + 1` produces the empty suffix.
    pub fn suffix(&self, start: usize) -> &[u8] {
        debug_assert!(start >= 1 && start <= self.length + 1);
        &self.utf8_bytes[start..]
    }

    /// The residues as a string, without the padding byte.
    pub fn residues(&self) -> String {
        String::from_utf8_lossy(self.suffix(1)).into_owned()
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, ">{}", self.name)?;

        if let Some(ref details) = self.details {
            write!(f, " {details}")?
        };

        writeln!(f)?;

        // note: skip the padding byte of 255
        let mut iter = self.utf8_bytes[1..].chunks(80).peekable();

        while let Some(byte_chunk) = iter.next() {
            match std::str::from_utf8(byte_chunk) {
                Ok(seq_line) => {
                    write!(f, "{}", seq_line)?;
                    if iter.peek().is_some() {
                        // if we're not on the last
                        // line, add a linebreak
                        writeln!(f)?;
                    }
                }
                Err(_) => return Err(std::fmt::Error),
            }
        }
        Ok(())
    }
}

impl Debug for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.residues())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};

    #[test]
    fn test_from_utf8_is_one_indexed() -> anyhow::Result<()> {
        let seq = Sequence::from_utf8(Alphabet::Dna, b"ACgt")?;

        check!(seq.length == 4);
        check!(seq.utf8_bytes == vec![255, b'A', b'C', b'g', b't']);
        check!(seq.digital_bytes == vec![255, 0, 1, 2, 3]);
        check!(seq.suffix(3) == b"gt");
        check!(seq.suffix(5).is_empty());
        Ok(())
    }

    #[test]
    fn test_from_utf8_rejects_unknown_bytes() {
        let_assert!(Err(err) = Sequence::from_utf8(Alphabet::Dna, b"ACXT"));
        check!(err.downcast_ref::<UnknownUtf8SequenceByteError>().is_some());

        let_assert!(Err(_) = Sequence::from_utf8(Alphabet::Dna, b"AC T"));
    }

    #[test]
    fn test_from_digital() -> anyhow::Result<()> {
        let seq = Sequence::from_digital(Alphabet::Dna, &[3, 2, 1, 0])?;
        check!(seq.residues() == "TGCA");

        let_assert!(Err(err) = Sequence::from_digital(Alphabet::Dna, &[4]));
        check!(err.downcast_ref::<UnknownDigitalSequenceByteError>().is_some());
        Ok(())
    }

    #[test]
    fn test_empty_sequence() -> anyhow::Result<()> {
        let seq = Sequence::from_utf8(Alphabet::Dna, b"")?;
        check!(seq.is_empty());
        check!(seq.residues() == "");
        Ok(())
    }

    #[test]
    fn test_from_fasta() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("seqs.fa");
        std::fs::write(&path, ">one first record\nACGT\nACGT\n>two\ngattaca\n")?;

        let seqs = Sequence::from_fasta(Alphabet::Dna, &path)?;

        check!(seqs.len() == 2);
        check!(seqs[0].name == "one");
        check!(seqs[0].details.as_deref() == Some("first record"));
        check!(seqs[0].residues() == "ACGTACGT");
        check!(seqs[1].name == "two");
        check!(seqs[1].details.is_none());
        check!(seqs[1].length == 7);
        Ok(())
    }

    #[test]
    fn test_display_is_fasta() -> anyhow::Result<()> {
        let seq = Sequence::from_utf8(Alphabet::Dna, b"ACGT")?.with_name("seq");
        check!(format!("{seq}") == ">seq\nACGT");
        check!(format!("{seq:?}") == "ACGT");
        Ok(())
    }
}
