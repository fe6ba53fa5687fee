use rand::Rng;
use thiserror::Error;

use crate::alphabet::Alphabet;
use crate::structs::Sequence;

#[derive(Error, Debug)]
#[error("invalid sequence length range: [{min_length}, {max_length}] (the minimum must be positive and no larger than the maximum)")]
pub struct InvalidLengthRangeError {
    min_length: usize,
    max_length: usize,
}

/// Draw a random sequence whose length is uniform in `[min_length, max_length]`
/// and whose residues are uniform over the canonical residues of `alphabet`.
pub fn random_sequence<R: Rng>(
    alphabet: Alphabet,
    min_length: usize,
    max_length: usize,
    rng: &mut R,
) -> anyhow::Result<Sequence> {
    if min_length == 0 || max_length < min_length {
        return Err(InvalidLengthRangeError {
            min_length,
            max_length,
        }
        .into());
    }

    let residues = alphabet.canonical_residues();
    let length = rng.gen_range(min_length..=max_length);

    let utf8_bytes: Vec<u8> = (0..length)
        .map(|_| residues[rng.gen_range(0..residues.len())])
        .collect();

    Sequence::from_utf8(alphabet, &utf8_bytes)
}

pub fn random_dna<R: Rng>(
    min_length: usize,
    max_length: usize,
    rng: &mut R,
) -> anyhow::Result<Sequence> {
    random_sequence(Alphabet::Dna, min_length, max_length, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn test_lengths_are_in_range() -> anyhow::Result<()> {
        let mut rng = Pcg64::seed_from_u64(0);
        let mut seen_min = false;
        let mut seen_max = false;

        for _ in 0..500 {
            let seq = random_dna(3, 6, &mut rng)?;
            check!(seq.length >= 3 && seq.length <= 6);
            seen_min |= seq.length == 3;
            seen_max |= seq.length == 6;
        }

        check!(seen_min);
        check!(seen_max);
        Ok(())
    }

    #[test]
    fn test_residues_come_from_alphabet() -> anyhow::Result<()> {
        let mut rng = Pcg64::seed_from_u64(1);
        for alphabet in [Alphabet::Dna, Alphabet::Amino] {
            let seq = random_sequence(alphabet, 100, 100, &mut rng)?;
            check!(seq.length == 100);
            check!(seq
                .suffix(1)
                .iter()
                .all(|b| alphabet.canonical_residues().contains(b)));
        }
        Ok(())
    }

    #[test]
    fn test_same_seed_same_sequence() -> anyhow::Result<()> {
        let seq_1 = random_dna(40, 80, &mut Pcg64::seed_from_u64(9))?;
        let seq_2 = random_dna(40, 80, &mut Pcg64::seed_from_u64(9))?;
        check!(seq_1 == seq_2);
        Ok(())
    }

    #[test]
    fn test_invalid_ranges() {
        let mut rng = Pcg64::seed_from_u64(0);

        let_assert!(Err(err) = random_dna(0, 5, &mut rng));
        check!(err.downcast_ref::<InvalidLengthRangeError>().is_some());

        let_assert!(Err(err) = random_dna(6, 5, &mut rng));
        check!(err.downcast_ref::<InvalidLengthRangeError>().is_some());

        let_assert!(Ok(seq) = random_dna(5, 5, &mut rng));
        check!(seq.length == 5);
    }
}
