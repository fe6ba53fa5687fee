use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::LevelFilter;
use thiserror::Error;

use crate::args::CommonArgs;

#[derive(Error, Debug)]
#[error("file does not appear to be fasta formatted: {path}")]
pub struct UnrecognizedFileFormatError {
    path: String,
}

/// Make sure the first non-blank line of a file looks like a fasta header.
pub fn check_fasta_format(path: &impl AsRef<Path>) -> anyhow::Result<()> {
    let file = File::open(path).context(format!(
        "failed to open file: {}",
        path.as_ref().to_string_lossy()
    ))?;

    let reader = BufReader::new(file);
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        if line.starts_with('>') {
            return Ok(());
        }
        break;
    }

    Err(UnrecognizedFileFormatError {
        path: path.as_ref().to_string_lossy().to_string(),
    }
    .into())
}

#[derive(Error, Debug)]
#[error("output file already exists: {path} (use --allow-overwrite to replace it)")]
pub struct OutputExistsError {
    path: String,
}

pub trait PathBufExt {
    fn check_writable(&self, allow_overwrite: bool) -> anyhow::Result<()>;
    fn open(&self, allow_overwrite: bool) -> anyhow::Result<BufWriter<File>>;
}

impl PathBufExt for PathBuf {
    /// Fail if the file exists and may not be replaced. Nothing is created.
    fn check_writable(&self, allow_overwrite: bool) -> anyhow::Result<()> {
        if !allow_overwrite && self.exists() {
            return Err(OutputExistsError {
                path: self.to_string_lossy().to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn open(&self, allow_overwrite: bool) -> anyhow::Result<BufWriter<File>> {
        let mut file_options = File::options();

        if allow_overwrite {
            file_options.write(true).truncate(true).create(true);
        } else {
            file_options.write(true).create_new(true);
        };

        let file = file_options
            .open(self)
            .context(format!("failed to create file: {}", self.to_string_lossy()))?;

        Ok(BufWriter::new(file))
    }
}

pub fn log_level(common_args: &CommonArgs) -> LevelFilter {
    if common_args.quiet {
        return LevelFilter::Error;
    }

    match common_args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. `RUST_LOG` still overrides the command line level.
pub fn init_logging(common_args: &CommonArgs) {
    // a logger may already be installed (e.g. by a test harness)
    let _ = env_logger::Builder::new()
        .filter_level(log_level(common_args))
        .parse_default_env()
        .format_timestamp_secs()
        .try_init();
}

pub fn set_threads(num_threads: usize) -> anyhow::Result<()> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .context("failed to build rayon global threadpool")
}
