use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use libstrand::alphabet::Alphabet;

#[derive(Subcommand)]
pub enum SubCommands {
    #[command(about = "Repeatedly generate two random sequences and print their optimal alignment")]
    Interactive(InteractiveArgs),
    #[command(about = "Align two sequences given on the command line")]
    Align(AlignArgs),
    #[command(about = "Align every query sequence against every target sequence")]
    Batch(BatchArgs),
}

#[derive(Parser)]
#[command(name = "strand")]
#[command(about = "Compute optimal pairwise sequence alignments by memoized recursion")]
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Increase logging verbosity (-v: debug, -vv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(long = "quiet", default_value_t = false)]
    pub quiet: bool,
}

#[derive(Args, Debug, Clone)]
pub struct AlignerArgs {
    /// Always fill the suffix table iteratively instead of recursing
    #[arg(long = "bottom-up", action)]
    pub bottom_up: bool,

    /// Fill the suffix table iteratively when the combined sequence length exceeds this
    #[arg(long = "max-recursion-length", default_value_t = 2000usize, value_name = "N")]
    pub max_recursion_length: usize,
}

impl Default for AlignerArgs {
    fn default() -> Self {
        Self {
            bottom_up: false,
            max_recursion_length: 2000,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// The residue alphabet: dna or amino
    #[arg(short = 'a', long = "alphabet", default_value = "dna")]
    pub alphabet: Alphabet,

    /// Seed the random number generator for reproducible sequences
    #[arg(short = 's', long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// The minimum length of the first sequence
    #[arg(long = "min-1", default_value_t = 40usize, value_name = "N")]
    pub seq_1_min_length: usize,

    /// The maximum length of the first sequence
    #[arg(long = "max-1", default_value_t = 80usize, value_name = "N")]
    pub seq_1_max_length: usize,

    /// The minimum length of the second sequence
    #[arg(long = "min-2", default_value_t = 40usize, value_name = "N")]
    pub seq_2_min_length: usize,

    /// The maximum length of the second sequence
    #[arg(long = "max-2", default_value_t = 100usize, value_name = "N")]
    pub seq_2_max_length: usize,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::Dna,
            seed: None,
            seq_1_min_length: 40,
            seq_1_max_length: 80,
            seq_2_min_length: 40,
            seq_2_max_length: 100,
        }
    }
}

#[derive(Debug, Args, Clone, Default)]
pub struct InteractiveArgs {
    /// Arguments that control sequence generation
    #[command(flatten)]
    pub generate_args: GenerateArgs,

    /// Arguments that control the aligner
    #[command(flatten)]
    pub aligner_args: AlignerArgs,

    /// Arguments that are common across all strand subcommands
    #[command(flatten)]
    pub common_args: CommonArgs,
}

#[derive(Debug, Args, Clone)]
pub struct AlignArgs {
    /// The first sequence
    #[arg(value_name = "SEQ_1")]
    pub seq_1: String,

    /// The second sequence
    #[arg(value_name = "SEQ_2")]
    pub seq_2: String,

    /// The residue alphabet: dna or amino
    #[arg(short = 'a', long = "alphabet", default_value = "dna")]
    pub alphabet: Alphabet,

    /// Print the alignment as JSON
    #[arg(long = "json", action)]
    pub json: bool,

    /// Arguments that control the aligner
    #[command(flatten)]
    pub aligner_args: AlignerArgs,

    /// Arguments that are common across all strand subcommands
    #[command(flatten)]
    pub common_args: CommonArgs,
}

#[derive(Debug, Args, Clone)]
pub struct BatchArgs {
    /// Query file
    #[arg(value_name = "QUERY.fasta")]
    pub query_path: PathBuf,

    /// Target file
    #[arg(value_name = "TARGET.fasta")]
    pub target_path: PathBuf,

    /// The residue alphabet: dna or amino
    #[arg(short = 'a', long = "alphabet", default_value = "dna")]
    pub alphabet: Alphabet,

    /// Where to place tabular output
    #[arg(
        short = 'T',
        long = "tab-output",
        default_value = "results.tbl",
        value_name = "path"
    )]
    pub tbl_results_path: PathBuf,

    /// Where to place stats output
    #[arg(short = 'S', long = "stats-output", value_name = "path")]
    pub stats_results_path: Option<PathBuf>,

    /// Allow strand to overwrite files
    #[arg(short = 'q', long = "allow-overwrite", default_value_t = false)]
    pub allow_overwrite: bool,

    /// The number of threads to use
    #[arg(
        short = 't',
        long = "threads",
        default_value_t = 8usize,
        value_name = "n"
    )]
    pub num_threads: usize,

    /// Arguments that control the aligner
    #[command(flatten)]
    pub aligner_args: AlignerArgs,

    /// Arguments that are common across all strand subcommands
    #[command(flatten)]
    pub common_args: CommonArgs,
}
