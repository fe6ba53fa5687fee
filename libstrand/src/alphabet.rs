use std::fmt::{Display, Formatter};
use std::str::FromStr;

use phf::phf_map;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const UTF8_SPACE: u8 = 32;

/// The symbol placed opposite a residue that has been aligned to a gap.
pub const GAP_SYMBOL: u8 = UTF8_SPACE;

/// maps from \<usize\> -> \<UTF8 value for usize\>
pub const UTF8_NUMERIC: [u8; 10] = [48, 49, 50, 51, 52, 53, 54, 55, 56, 57];

pub const DNA_ALPHABET: [u8; 4] = [b'A', b'C', b'G', b'T'];

pub const AMINO_ALPHABET: [u8; 20] = [
    b'A', b'C', b'D', b'E', b'F', b'G', b'H', b'I', b'K', b'L', b'M', b'N', b'P', b'Q', b'R', b'S',
    b'T', b'V', b'W', b'Y',
];

pub static UTF8_TO_DIGITAL_DNA: phf::Map<u8, u8> = phf_map! {
    // upper case
    65u8 => 0,    // A
    67u8 => 1,    // C
    71u8 => 2,    // G
    84u8 => 3,    // T
    // lower case
    97u8 => 0,    // a
    99u8 => 1,    // c
    103u8 => 2,   // g
    116u8 => 3,   // t
};

pub static DNA_INVERSE_MAP: phf::Map<u8, u8> = phf_map! {
    0u8 => 65,    // A
    1u8 => 67,    // C
    2u8 => 71,    // G
    3u8 => 84,    // T
};

pub static UTF8_TO_DIGITAL_AMINO: phf::Map<u8, u8> = phf_map! {
    // upper case
    65u8 => 0,    // A
    67u8 => 1,    // C
    68u8 => 2,    // D
    69u8 => 3,    // E
    70u8 => 4,    // F
    71u8 => 5,    // G
    72u8 => 6,    // H
    73u8 => 7,    // I
    75u8 => 8,    // K
    76u8 => 9,    // L
    77u8 => 10,   // M
    78u8 => 11,   // N
    80u8 => 12,   // P
    81u8 => 13,   // Q
    82u8 => 14,   // R
    83u8 => 15,   // S
    84u8 => 16,   // T
    86u8 => 17,   // V
    87u8 => 18,   // W
    89u8 => 19,   // Y
    // lower case
    97u8 => 0,    // a
    99u8 => 1,    // c
    100u8 => 2,   // d
    101u8 => 3,   // e
    102u8 => 4,   // f
    103u8 => 5,   // g
    104u8 => 6,   // h
    105u8 => 7,   // i
    107u8 => 8,   // k
    108u8 => 9,   // l
    109u8 => 10,  // m
    110u8 => 11,  // n
    112u8 => 12,  // p
    113u8 => 13,  // q
    114u8 => 14,  // r
    115u8 => 15,  // s
    116u8 => 16,  // t
    118u8 => 17,  // v
    119u8 => 18,  // w
    121u8 => 19,  // y
    // degenerate characters
    79u8 => 20,   // O
    85u8 => 21,   // U
    88u8 => 22,   // X
    66u8 => 23,   // B
    90u8 => 24,   // Z
    74u8 => 25,   // J
    111u8 => 20,  // o
    117u8 => 21,  // u
    120u8 => 22,  // x
    98u8 => 23,   // b
    122u8 => 24,  // z
    106u8 => 25,  // j
};

pub static AMINO_INVERSE_MAP: phf::Map<u8, u8> = phf_map! {
    0u8  => 65,   // A
    1u8  => 67,   // C
    2u8  => 68,   // D
    3u8  => 69,   // E
    4u8  => 70,   // F
    5u8  => 71,   // G
    6u8  => 72,   // H
    7u8  => 73,   // I
    8u8  => 75,   // K
    9u8  => 76,   // L
    10u8 => 77,   // M
    11u8 => 78,   // N
    12u8 => 80,   // P
    13u8 => 81,   // Q
    14u8 => 82,   // R
    15u8 => 83,   // S
    16u8 => 84,   // T
    17u8 => 86,   // V
    18u8 => 87,   // W
    19u8 => 89,   // Y
    // end base alphabet
    20u8 => 79,   // O
    21u8 => 85,   // U
    22u8 => 88,   // X
    23u8 => 66,   // B
    24u8 => 90,   // Z
    25u8 => 74,   // J
};

#[derive(Error, Debug)]
#[error("unknown alphabet: {name} (expected \"dna\" or \"amino\")")]
pub struct UnknownAlphabetError {
    name: String,
}

/// The residue alphabet a sequence is drawn from.
///
/// No alphabet contains the [`GAP_SYMBOL`].
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alphabet {
    #[default]
    Dna,
    Amino,
}

impl Alphabet {
    /// The residues that random sequences are drawn from.
    pub fn canonical_residues(&self) -> &'static [u8] {
        match self {
            Alphabet::Dna => &DNA_ALPHABET,
            Alphabet::Amino => &AMINO_ALPHABET,
        }
    }

    pub fn utf8_to_digital(&self) -> &'static phf::Map<u8, u8> {
        match self {
            Alphabet::Dna => &UTF8_TO_DIGITAL_DNA,
            Alphabet::Amino => &UTF8_TO_DIGITAL_AMINO,
        }
    }

    pub fn digital_to_utf8(&self) -> &'static phf::Map<u8, u8> {
        match self {
            Alphabet::Dna => &DNA_INVERSE_MAP,
            Alphabet::Amino => &AMINO_INVERSE_MAP,
        }
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Alphabet::Dna => write!(f, "DNA"),
            Alphabet::Amino => write!(f, "amino"),
        }
    }
}

impl FromStr for Alphabet {
    type Err = UnknownAlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dna" => Ok(Alphabet::Dna),
            "amino" | "protein" => Ok(Alphabet::Amino),
            _ => Err(UnknownAlphabetError {
                name: s.to_string(),
            }),
        }
    }
}
