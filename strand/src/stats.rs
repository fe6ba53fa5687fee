use std::{
    fmt::Debug,
    io::Write,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use strum::{EnumCount, EnumIter, IntoEnumIterator};

use crate::aligner::{AlignOutcome, Strategy};
use libstrand::align::structs::AlignedColumn;

#[repr(usize)]
#[derive(Clone, Copy, EnumIter, EnumCount)]
pub enum SerialTimed {
    Total,
    Reading,
    Alignment,
    Output,
}

impl Debug for SerialTimed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            SerialTimed::Total => "total",
            SerialTimed::Reading => "reading",
            SerialTimed::Alignment => "alignment",
            SerialTimed::Output => "output",
        };

        write!(f, "{}", str)
    }
}

#[repr(usize)]
#[derive(Clone, Copy, EnumIter, EnumCount)]
pub enum ComputedValue {
    Queries,
    Targets,
    Alignments,
    SuffixPairs,
}

impl Debug for ComputedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            ComputedValue::Queries => "queries",
            ComputedValue::Targets => "targets",
            ComputedValue::Alignments => "total alignments",
            ComputedValue::SuffixPairs => "total potential suffix pairs",
        };

        write!(f, "{}", str)
    }
}

#[repr(usize)]
#[derive(Clone, Copy, EnumIter, EnumCount)]
pub enum CountedValue {
    MemoizedAlignments,
    BottomUpAlignments,
    SuffixPairs,
    Matches,
    Mismatches,
    Gaps,
}

impl Debug for CountedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            CountedValue::MemoizedAlignments => "memoized alignments",
            CountedValue::BottomUpAlignments => "bottom-up alignments",
            CountedValue::SuffixPairs => "suffix pairs cached",
            CountedValue::Matches => "aligned matches",
            CountedValue::Mismatches => "aligned mismatches",
            CountedValue::Gaps => "aligned gaps",
        };

        write!(f, "{}", str)
    }
}

#[derive(Clone, Default)]
pub struct Stats {
    serial_times: [Duration; SerialTimed::COUNT],
    counted_values: Arc<[AtomicU64; CountedValue::COUNT]>,
    computed_values: [u64; ComputedValue::COUNT],
}

impl Stats {
    pub fn new(num_queries: usize, num_targets: usize, num_suffix_pairs: usize) -> Self {
        let mut stats = Self::default();

        stats.set_computed_value(ComputedValue::Queries, num_queries as u64);
        stats.set_computed_value(ComputedValue::Targets, num_targets as u64);
        stats.set_computed_value(
            ComputedValue::Alignments,
            (num_queries * num_targets) as u64,
        );
        stats.set_computed_value(ComputedValue::SuffixPairs, num_suffix_pairs as u64);

        stats
    }

    /// Record one finished alignment. This is safe to call from many threads.
    pub fn add_sample(&self, outcome: &AlignOutcome) {
        match outcome.strategy {
            Strategy::Memoized => self.increment_count(CountedValue::MemoizedAlignments),
            Strategy::BottomUp => self.increment_count(CountedValue::BottomUpAlignments),
        }
        self.add_count(CountedValue::SuffixPairs, outcome.suffix_pairs);

        outcome.alignment.columns().for_each(|column| match column {
            AlignedColumn::Match => self.increment_count(CountedValue::Matches),
            AlignedColumn::Mismatch => self.increment_count(CountedValue::Mismatches),
            AlignedColumn::Gap => self.increment_count(CountedValue::Gaps),
        });
    }

    pub fn set_serial_time(&mut self, timed: SerialTimed, time: Duration) {
        self.serial_times[timed as usize] = time;
    }

    fn serial_time_total(&self, timed: SerialTimed) -> Duration {
        self.serial_times[timed as usize]
    }

    fn serial_time_pct(&self, timed: SerialTimed) -> f64 {
        let total_nanos = Self::nanos(self.serial_times[SerialTimed::Total as usize]) as f64;
        let nanos = Self::nanos(self.serial_times[timed as usize]) as f64;

        if total_nanos == 0.0 {
            0.0
        } else {
            nanos / total_nanos
        }
    }

    fn computed_value(&self, computed: ComputedValue) -> u64 {
        self.computed_values[computed as usize]
    }

    fn set_computed_value(&mut self, computed: ComputedValue, value: u64) {
        self.computed_values[computed as usize] = value
    }

    pub fn counted_value(&self, counted: CountedValue) -> u64 {
        self.counted_values[counted as usize].load(Ordering::SeqCst)
    }

    pub fn increment_count(&self, counted: CountedValue) {
        self.counted_values[counted as usize].fetch_add(1, Ordering::SeqCst);
    }

    pub fn add_count(&self, counted: CountedValue, count: usize) {
        self.counted_values[counted as usize].fetch_add(count as u64, Ordering::SeqCst);
    }

    pub fn serial_string(&self, timed: SerialTimed) -> String {
        let width = format!(
            "{:.2}",
            self.serial_time_total(SerialTimed::Total).as_secs_f64()
        )
        .len();

        format!(
            "{:w$.2}s ({:>6.2}%)",
            self.serial_time_total(timed).as_secs_f64(),
            self.serial_time_pct(timed) * 100.0,
            w = width,
        )
    }

    pub fn write(&self, out: &mut impl Write) -> anyhow::Result<()> {
        writeln!(out, "summary statistics:")?;
        self.write_stats(out)?;
        writeln!(out)?;
        self.write_runtime(out)
    }

    pub fn write_stats(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let lines: Vec<(String, String)> = ComputedValue::iter()
            .map(|c| (format!("{c:?}"), Self::format_num(self.computed_value(c))))
            .chain(
                CountedValue::iter()
                    .map(|c| (format!("{c:?}"), Self::format_num(self.counted_value(c)))),
            )
            .collect();

        let max_width = lines
            .iter()
            .map(|(label, count)| label.len() + count.len())
            .max()
            .unwrap_or(0);

        lines
            .iter()
            .enumerate()
            .try_for_each(|(idx, (label, count))| {
                let branch = if idx + 1 == lines.len() { "└─" } else { "├─" };
                writeln!(
                    out,
                    " {branch} {label}: {count:>w$}",
                    w = max_width - label.len()
                )
            })?;

        Ok(())
    }

    pub fn write_runtime(&self, out: &mut impl Write) -> anyhow::Result<()> {
        writeln!(out, "runtime: {}", self.serial_string(SerialTimed::Total))?;

        writeln!(
            out,
            " ├─ reading:   {}",
            self.serial_string(SerialTimed::Reading)
        )?;

        writeln!(
            out,
            " ├─ alignment: {}",
            self.serial_string(SerialTimed::Alignment)
        )?;

        writeln!(
            out,
            " └─ output:    {}",
            self.serial_string(SerialTimed::Output)
        )?;

        Ok(())
    }

    pub fn nanos(time: Duration) -> u64 {
        // u64::MAX nanoseconds is like 5,000,000 hours
        // or something, so this clamp should be fine.
        time.as_nanos().min(u64::MAX as u128) as u64
    }

    pub fn format_num(num: u64) -> String {
        let num_str = num.to_string();
        let mut result = String::new();
        let len = num_str.len();

        for (i, ch) in num_str.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                result.push(',');
            }
            result.push(ch);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use libstrand::align::structs::Alignment;

    #[test]
    fn test_format_num() {
        check!(Stats::format_num(0) == "0");
        check!(Stats::format_num(999) == "999");
        check!(Stats::format_num(1000) == "1,000");
        check!(Stats::format_num(1234567) == "1,234,567");
    }

    #[test]
    fn test_add_sample() {
        let stats = Stats::new(1, 2, 10);
        let outcome = AlignOutcome {
            alignment: Alignment {
                aligned_1: "AC G".to_string(),
                aligned_2: "AGTG".to_string(),
                score: -1,
            },
            strategy: Strategy::Memoized,
            suffix_pairs: 4,
        };

        stats.add_sample(&outcome);
        stats.add_sample(&outcome);

        check!(stats.counted_value(CountedValue::MemoizedAlignments) == 2);
        check!(stats.counted_value(CountedValue::BottomUpAlignments) == 0);
        check!(stats.counted_value(CountedValue::SuffixPairs) == 8);
        check!(stats.counted_value(CountedValue::Matches) == 4);
        check!(stats.counted_value(CountedValue::Mismatches) == 2);
        check!(stats.counted_value(CountedValue::Gaps) == 2);
    }

    #[test]
    fn test_write() -> anyhow::Result<()> {
        let stats = Stats::new(3, 4, 100);
        let mut out = Vec::new();
        stats.write(&mut out)?;
        let text = String::from_utf8(out)?;

        check!(text.starts_with("summary statistics:\n"));
        let line = text.lines().find(|l| l.contains("total alignments:"));
        let_assert!(Some(line) = line);
        check!(line.starts_with(" ├─ "));
        check!(line.ends_with(" 12"));
        check!(text.contains(" └─ aligned gaps:"));
        check!(text.contains("runtime:"));
        Ok(())
    }
}
