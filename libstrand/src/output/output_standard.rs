use crate::align::structs::{AlignedColumn, Alignment};
use crate::alphabet::{UTF8_NUMERIC, UTF8_SPACE};

use anyhow::Result;
use std::io::Write;

const INDENT: &str = "      ";
const PLUS_PREFIX: &str = "   +  ";
const MINUS_PREFIX: &str = "   -  ";

/// Build the marker lines that sit above and below the aligned residues.
///
/// The "plus" line has a 1 over each match. The "minus" line has a 1
/// under each mismatch and a 2 under each gap, the magnitude of the penalty.
pub fn marker_lines(alignment: &Alignment) -> (String, String) {
    let (plus_bytes, minus_bytes): (Vec<u8>, Vec<u8>) = alignment
        .columns()
        .map(|column| match column {
            AlignedColumn::Match => (UTF8_NUMERIC[1], UTF8_SPACE),
            AlignedColumn::Mismatch => (UTF8_SPACE, UTF8_NUMERIC[1]),
            AlignedColumn::Gap => (UTF8_SPACE, UTF8_NUMERIC[2]),
        })
        .unzip();

    (
        String::from_utf8_lossy(&plus_bytes).into_owned(),
        String::from_utf8_lossy(&minus_bytes).into_owned(),
    )
}

pub fn write_standard_output(alignment: &Alignment, out: &mut impl Write) -> Result<()> {
    let (plus_line, minus_line) = marker_lines(alignment);

    writeln!(out, "Optimal alignment score is {}", alignment.score)?;
    writeln!(out)?;
    writeln!(out, "{PLUS_PREFIX}{plus_line}")?;
    writeln!(out, "{INDENT}{}", alignment.aligned_1)?;
    writeln!(out, "{INDENT}{}", alignment.aligned_2)?;
    writeln!(out, "{MINUS_PREFIX}{minus_line}")?;
    writeln!(out)?;
    Ok(())
}
