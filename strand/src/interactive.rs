use std::io::{BufRead, Write};

use anyhow::Context;
use libstrand::generate::random_sequence;
use libstrand::output::write_standard_output;
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::args::{GenerateArgs, InteractiveArgs};

/// The answer that ends the loop.
const STOP_ANSWER: &str = "no";

impl GenerateArgs {
    pub fn rng(&self) -> Pcg64 {
        match self.seed {
            Some(seed) => {
                info!("seeding sequence generation with: {seed}");
                Pcg64::seed_from_u64(seed)
            }
            None => Pcg64::from_entropy(),
        }
    }
}

pub fn interactive(args: &InteractiveArgs) -> anyhow::Result<()> {
    let mut rng = args.generate_args.rng();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let rounds = run_interactive(args, &mut stdin.lock(), &mut stdout.lock(), &mut rng)?;
    debug!("interactive session ended after {rounds} alignments");
    Ok(())
}

/// Prompt for another pair of random sequences until the answer is "no" or
/// the input ends, aligning and printing each pair.
///
/// Returns the number of pairs that were aligned.
pub fn run_interactive<R: Rng>(
    args: &InteractiveArgs,
    input: &mut impl BufRead,
    out: &mut impl Write,
    rng: &mut R,
) -> anyhow::Result<usize> {
    let generate_args = &args.generate_args;
    let mut answer = String::new();
    let mut rounds = 0usize;

    loop {
        write!(
            out,
            "Generate random {} strands? ",
            generate_args.alphabet
        )?;
        out.flush()?;

        answer.clear();
        let num_bytes = input
            .read_line(&mut answer)
            .context("failed to read answer from input")?;

        if num_bytes == 0 {
            // end of input
            writeln!(out)?;
            break;
        }

        if answer.trim() == STOP_ANSWER {
            break;
        }

        let seq_1 = random_sequence(
            generate_args.alphabet,
            generate_args.seq_1_min_length,
            generate_args.seq_1_max_length,
            rng,
        )
        .context("failed to generate the first sequence")?;

        let seq_2 = random_sequence(
            generate_args.alphabet,
            generate_args.seq_2_min_length,
            generate_args.seq_2_max_length,
            rng,
        )
        .context("failed to generate the second sequence")?;

        writeln!(out, "Aligning these two strands:")?;
        writeln!(out, "{}", seq_1.residues())?;
        writeln!(out, "{}", seq_2.residues())?;

        let outcome = args.aligner_args.align(&seq_1, &seq_2)?;
        write_standard_output(&outcome.alignment, out)?;

        rounds += 1;
    }

    Ok(rounds)
}
