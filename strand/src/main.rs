mod align;
mod aligner;
mod args;
mod batch;
mod interactive;
mod stats;
mod util;

use align::align;
use args::{Cli, SubCommands};
use batch::batch;
use interactive::interactive;
use util::{init_logging, set_threads};

use clap::Parser;
use colored::Colorize;

fn run(command: SubCommands) -> anyhow::Result<()> {
    match command {
        SubCommands::Interactive(args) => {
            init_logging(&args.common_args);
            interactive(&args)?;
        }
        SubCommands::Align(args) => {
            init_logging(&args.common_args);
            align(&args)?;
        }
        SubCommands::Batch(args) => {
            init_logging(&args.common_args);
            set_threads(args.num_threads)?;
            batch(&args)?;
        }
    }
    Ok(())
}

fn main() {
    color_backtrace::install();

    if let Err(err) = run(Cli::parse().command) {
        eprintln!("{} {err:?}", "error:".red().bold());
        std::process::exit(1);
    }
}
