use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use indicatif::ProgressBar;
use libstrand::alphabet::Alphabet;
use libstrand::output::{write_tabular_output, AlignmentSummary};
use libstrand::structs::Sequence;
use log::{debug, info};
use rayon::prelude::*;
use thiserror::Error;

use crate::args::BatchArgs;
use crate::stats::{SerialTimed, Stats};
use crate::util::{check_fasta_format, PathBufExt};

#[derive(Error, Debug)]
#[error("no sequences found in: {path}")]
pub struct EmptyFastaError {
    path: String,
}

fn read_sequences(alphabet: Alphabet, path: &Path) -> anyhow::Result<Vec<Sequence>> {
    check_fasta_format(&path)?;

    let seqs = Sequence::from_fasta(alphabet, path)?;
    if seqs.is_empty() {
        return Err(EmptyFastaError {
            path: path.to_string_lossy().to_string(),
        }
        .into());
    }

    Ok(seqs)
}

pub fn batch(args: &BatchArgs) -> anyhow::Result<()> {
    // make sure every output can be written before doing any work
    args.tbl_results_path.check_writable(args.allow_overwrite)?;
    if let Some(path) = &args.stats_results_path {
        path.check_writable(args.allow_overwrite)?;
    }

    let mut tbl_out = args.tbl_results_path.open(args.allow_overwrite)?;
    let mut stats_out = match &args.stats_results_path {
        Some(path) => Some(path.open(args.allow_overwrite)?),
        None => None,
    };

    let stats = run_batch(args, &mut tbl_out)?;
    tbl_out.flush()?;

    info!(
        "wrote alignments to: {}",
        args.tbl_results_path.to_string_lossy()
    );

    if let Some(out) = &mut stats_out {
        stats.write(out)?;
        out.flush()?;
    }

    Ok(())
}

/// Align every query against every target and write one table row per pair to `tbl_out`.
pub fn run_batch(args: &BatchArgs, tbl_out: &mut impl Write) -> anyhow::Result<Stats> {
    let total_now = Instant::now();

    let now = Instant::now();
    let queries = read_sequences(args.alphabet, &args.query_path)?;
    let targets = read_sequences(args.alphabet, &args.target_path)?;
    let reading_time = now.elapsed();

    let pairs: Vec<(&Sequence, &Sequence)> = queries
        .iter()
        .flat_map(|query| targets.iter().map(move |target| (query, target)))
        .collect();

    let num_suffix_pairs: usize = pairs
        .iter()
        .map(|(query, target)| query.length * target.length)
        .sum();

    let mut stats = Stats::new(queries.len(), targets.len(), num_suffix_pairs);
    stats.set_serial_time(SerialTimed::Reading, reading_time);

    info!(
        "aligning {} queries against {} targets",
        queries.len(),
        targets.len()
    );

    let now = Instant::now();
    let bar = if args.common_args.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(pairs.len() as u64)
    };

    let summaries = pairs
        .par_iter()
        .panic_fuse()
        .map(|(query, target)| {
            let outcome = args.aligner_args.align(query, target).with_context(|| {
                format!("failed to align {} against {}", query.name, target.name)
            })?;

            stats.add_sample(&outcome);
            bar.inc(1);

            Ok(AlignmentSummary::new(query, target, &outcome.alignment))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    bar.finish();
    stats.set_serial_time(SerialTimed::Alignment, now.elapsed());

    let now = Instant::now();
    write_tabular_output(&summaries, tbl_out)?;
    stats.set_serial_time(SerialTimed::Output, now.elapsed());

    stats.set_serial_time(SerialTimed::Total, total_now.elapsed());
    debug!("{} table rows written", summaries.len());

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{AlignerArgs, CommonArgs};
    use crate::stats::CountedValue;
    use crate::util::OutputExistsError;
    use assert2::{check, let_assert};

    fn batch_args(dir: &Path, queries: &str, targets: &str) -> anyhow::Result<BatchArgs> {
        let query_path = dir.join("query.fa");
        let target_path = dir.join("target.fa");
        std::fs::write(&query_path, queries)?;
        std::fs::write(&target_path, targets)?;

        Ok(BatchArgs {
            query_path,
            target_path,
            alphabet: Alphabet::Dna,
            tbl_results_path: dir.join("results.tbl"),
            stats_results_path: Some(dir.join("stats.txt")),
            allow_overwrite: false,
            num_threads: 1,
            aligner_args: AlignerArgs::default(),
            common_args: CommonArgs {
                verbose: 0,
                quiet: true,
            },
        })
    }

    #[test]
    fn test_batch_writes_every_pair() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let args = batch_args(
            dir.path(),
            ">q1\nACGT\n>q2\nTTTT\n",
            ">t1\nAGT\n>t2\nACGT\n>t3\nA\n",
        )?;

        batch(&args)?;

        let table = std::fs::read_to_string(&args.tbl_results_path)?;
        let rows: Vec<&str> = table.lines().filter(|l| !l.starts_with('#')).collect();
        check!(rows.len() == 6);

        let_assert!(Some(row) = rows.iter().find(|r| r.contains("q1") && r.contains("t1")));
        let fields: Vec<&str> = row.split_whitespace().collect();
        // query target query_len target_len ali_len score ...
        check!(fields[5] == "1");

        let_assert!(Some(row) = rows.iter().find(|r| r.contains("q1") && r.contains("t2")));
        let fields: Vec<&str> = row.split_whitespace().collect();
        check!(fields[5] == "4");

        let stats = std::fs::read_to_string(dir.path().join("stats.txt"))?;
        check!(stats.contains("total alignments"));

        Ok(())
    }

    #[test]
    fn test_batch_counts() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let mut args = batch_args(dir.path(), ">q\nACGT\n", ">t\nAGT\n")?;
        args.stats_results_path = None;

        let mut table = Vec::new();
        let stats = run_batch(&args, &mut table)?;
        check!(String::from_utf8(table)?.lines().count() > 1);
        check!(stats.counted_value(CountedValue::MemoizedAlignments) == 1);
        check!(stats.counted_value(CountedValue::BottomUpAlignments) == 0);
        check!(stats.counted_value(CountedValue::Matches) == 3);
        check!(stats.counted_value(CountedValue::Gaps) == 1);
        Ok(())
    }

    #[test]
    fn test_batch_refuses_to_overwrite() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let args = batch_args(dir.path(), ">q\nACGT\n", ">t\nAGT\n")?;
        std::fs::write(&args.tbl_results_path, "existing\n")?;

        let_assert!(Err(err) = batch(&args));
        check!(err.downcast_ref::<OutputExistsError>().is_some());
        check!(std::fs::read_to_string(&args.tbl_results_path)? == "existing\n");
        check!(!dir.path().join("stats.txt").exists());
        Ok(())
    }

    #[test]
    fn test_existing_stats_output_stops_before_any_table() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let args = batch_args(dir.path(), ">q\nACGT\n", ">t\nAGT\n")?;
        std::fs::write(dir.path().join("stats.txt"), "existing\n")?;

        let_assert!(Err(err) = batch(&args));
        check!(err.downcast_ref::<OutputExistsError>().is_some());
        check!(!args.tbl_results_path.exists());
        check!(std::fs::read_to_string(dir.path().join("stats.txt"))? == "existing\n");
        Ok(())
    }

    #[test]
    fn test_allow_overwrite_replaces_outputs() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let mut args = batch_args(dir.path(), ">q\nACGT\n", ">t\nAGT\n")?;
        args.allow_overwrite = true;
        std::fs::write(&args.tbl_results_path, "existing\n")?;
        std::fs::write(dir.path().join("stats.txt"), "existing\n")?;

        batch(&args)?;

        check!(std::fs::read_to_string(&args.tbl_results_path)?.starts_with('#'));
        check!(std::fs::read_to_string(dir.path().join("stats.txt"))?
            .starts_with("summary statistics:"));
        Ok(())
    }

    #[test]
    fn test_batch_rejects_bad_input() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;

        let args = batch_args(dir.path(), "ACGT\n", ">t\nAGT\n")?;
        check!(run_batch(&args, &mut Vec::new()).is_err());

        let args = batch_args(dir.path(), ">q\nACGU\n", ">t\nAGT\n")?;
        check!(run_batch(&args, &mut Vec::new()).is_err());

        Ok(())
    }
}
