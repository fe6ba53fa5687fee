use thiserror::Error;

use crate::alphabet::Alphabet;
use crate::structs::Sequence;

use super::structs::AlignmentCache;

#[derive(Error, Debug)]
#[error(
    "cache is sized for sequences of length ({cache_seq_1_length}, {cache_seq_2_length}), \
     but the sequences have length ({seq_1_length}, {seq_2_length})"
)]
pub struct CacheDimensionError {
    cache_seq_1_length: usize,
    cache_seq_2_length: usize,
    seq_1_length: usize,
    seq_2_length: usize,
}

#[derive(Error, Debug)]
#[error("can't align a {seq_1_alphabet} sequence to a {seq_2_alphabet} sequence")]
pub struct AlphabetMismatchError {
    seq_1_alphabet: Alphabet,
    seq_2_alphabet: Alphabet,
}

pub(super) fn check_alphabets(seq_1: &Sequence, seq_2: &Sequence) -> anyhow::Result<()> {
    if seq_1.alphabet != seq_2.alphabet {
        return Err(AlphabetMismatchError {
            seq_1_alphabet: seq_1.alphabet,
            seq_2_alphabet: seq_2.alphabet,
        }
        .into());
    }
    Ok(())
}

/// Fail fast before any alignment work starts if the inputs
/// can't be aligned together with the supplied cache.
pub(super) fn check_inputs(
    seq_1: &Sequence,
    seq_2: &Sequence,
    cache: &AlignmentCache,
) -> anyhow::Result<()> {
    check_alphabets(seq_1, seq_2)?;

    if cache.dimensions() != (seq_1.length, seq_2.length) {
        return Err(CacheDimensionError {
            cache_seq_1_length: cache.seq_1_length,
            cache_seq_2_length: cache.seq_2_length,
            seq_1_length: seq_1.length,
            seq_2_length: seq_2.length,
        }
        .into());
    }

    Ok(())
}
