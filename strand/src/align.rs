use std::io::Write;

use anyhow::Context;
use libstrand::output::write_standard_output;
use libstrand::structs::Sequence;

use crate::args::AlignArgs;

pub fn align(args: &AlignArgs) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    write_alignment(args, &mut stdout.lock())
}

pub fn write_alignment(args: &AlignArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let seq_1 = Sequence::from_utf8(args.alphabet, args.seq_1.as_bytes())
        .context("failed to parse the first sequence")?;
    let seq_2 = Sequence::from_utf8(args.alphabet, args.seq_2.as_bytes())
        .context("failed to parse the second sequence")?;

    let outcome = args.aligner_args.align(&seq_1, &seq_2)?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &outcome.alignment)
            .context("failed to serialize alignment")?;
        writeln!(out)?;
    } else {
        write_standard_output(&outcome.alignment, out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{AlignerArgs, CommonArgs};
    use assert2::{check, let_assert};
    use libstrand::align::structs::Alignment;
    use libstrand::alphabet::Alphabet;

    fn args(seq_1: &str, seq_2: &str, json: bool) -> AlignArgs {
        AlignArgs {
            seq_1: seq_1.to_string(),
            seq_2: seq_2.to_string(),
            alphabet: Alphabet::Dna,
            json,
            aligner_args: AlignerArgs::default(),
            common_args: CommonArgs::default(),
        }
    }

    #[test]
    fn test_standard_output() -> anyhow::Result<()> {
        let mut out = Vec::new();
        write_alignment(&args("ACGT", "AGT", false), &mut out)?;

        let text = String::from_utf8(out)?;
        check!(text == "Optimal alignment score is 1\n\n   +  1 11\n      ACGT\n      A GT\n   -   2  \n\n");
        Ok(())
    }

    #[test]
    fn test_json_output() -> anyhow::Result<()> {
        let mut out = Vec::new();
        write_alignment(&args("", "ATG", true), &mut out)?;

        let alignment: Alignment = serde_json::from_slice(&out)?;
        check!(alignment.aligned_1 == "   ");
        check!(alignment.aligned_2 == "ATG");
        check!(alignment.score == -6);
        Ok(())
    }

    #[test]
    fn test_bad_residue() {
        let mut out = Vec::new();
        let_assert!(Err(err) = write_alignment(&args("ACGU", "ACG", false), &mut out));
        check!(format!("{err}") == "failed to parse the first sequence");
        check!(out.is_empty());
    }
}
