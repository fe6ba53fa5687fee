use crate::align::structs::{AlignedColumn, Alignment};
use crate::structs::Sequence;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// The per-alignment values reported in tabular output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentSummary {
    pub query_name: String,
    pub target_name: String,
    pub query_length: usize,
    pub target_length: usize,
    pub alignment_length: usize,
    pub score: isize,
    pub matches: usize,
    pub mismatches: usize,
    pub gaps: usize,
}

impl AlignmentSummary {
    pub fn new(query: &Sequence, target: &Sequence, alignment: &Alignment) -> Self {
        let mut summary = Self {
            query_name: query.name.clone(),
            target_name: target.name.clone(),
            query_length: query.length,
            target_length: target.length,
            alignment_length: alignment.length(),
            score: alignment.score,
            matches: 0,
            mismatches: 0,
            gaps: 0,
        };

        alignment.columns().for_each(|column| match column {
            AlignedColumn::Match => summary.matches += 1,
            AlignedColumn::Mismatch => summary.mismatches += 1,
            AlignedColumn::Gap => summary.gaps += 1,
        });

        summary
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Field {
    Query,
    Target,
    QueryLength,
    TargetLength,
    AliLength,
    Score,
    Matches,
    Mismatches,
    Gaps,
}

impl Field {
    pub const DEFAULT_FIELDS: [Field; 9] = [
        Field::Query,
        Field::Target,
        Field::QueryLength,
        Field::TargetLength,
        Field::AliLength,
        Field::Score,
        Field::Matches,
        Field::Mismatches,
        Field::Gaps,
    ];

    fn value(&self, summary: &AlignmentSummary) -> String {
        match self {
            Field::Query => summary.query_name.clone(),
            Field::Target => summary.target_name.clone(),
            Field::QueryLength => summary.query_length.to_string(),
            Field::TargetLength => summary.target_length.to_string(),
            Field::AliLength => summary.alignment_length.to_string(),
            Field::Score => summary.score.to_string(),
            Field::Matches => summary.matches.to_string(),
            Field::Mismatches => summary.mismatches.to_string(),
            Field::Gaps => summary.gaps.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct TableFormat {
    pub fields: Vec<Field>,
    pub labels: Vec<Vec<String>>,
    pub widths: Vec<usize>,
}

impl TableFormat {
    pub fn new(fields: &[Field]) -> anyhow::Result<Self> {
        let mut labels = vec![];
        let mut widths = vec![];

        // this regex matches CamelCaseWords
        let label_regex =
            regex::Regex::new(r"[A-Z][a-z]*").context("failed to build field label regex")?;

        // this closure extracts the words & minimum column width for a field
        let label_fn = |field: &Field| -> anyhow::Result<(Vec<_>, usize)> {
            // the Debug string for an enum produces the variant name
            let field_name = format!("{:?}", field);

            let (label_words, lengths): (Vec<_>, Vec<_>) = label_regex
                .find_iter(&field_name)
                .map(|m| (m.as_str().to_lowercase(), m.len()))
                .unzip();

            // the length of the longest word
            // is the min width of the column
            let min_width = *lengths
                .iter()
                .max()
                .context("failed to produce max field label width")?;
            Ok((label_words, min_width))
        };

        let first_field = fields.first().context("table format has no fields")?;

        // the first column needs +2 to its minimum
        // width to accomodate the "# " prefix
        let (mut label_words, mut min_width) = label_fn(first_field)?;
        labels.push(label_words);
        widths.push(min_width + 2);

        for field in fields.iter().skip(1) {
            (label_words, min_width) = label_fn(field)?;
            labels.push(label_words);
            widths.push(min_width);
        }

        Ok(Self {
            fields: fields.to_vec(),
            labels,
            widths,
        })
    }

    pub fn update_widths(&mut self, summary: &AlignmentSummary) {
        self.fields.iter().enumerate().for_each(|(idx, field)| {
            let width = field.value(summary).len();
            self.widths[idx] = self.widths[idx].max(width);
        });
    }

    pub fn header(&self) -> anyhow::Result<String> {
        // the number of rows in the header is
        // the max number of words in a field
        let num_rows = self
            .labels
            .iter()
            .map(|l| l.len())
            .max()
            .context("field headers are empty")?;

        let mut header_row_strings: Vec<String> = vec!["# ".to_string(); num_rows + 1];

        // labels are bottom-aligned, with a rule underneath
        let mut header_append_fn = |words: &Vec<String>, width: usize| {
            let offset = num_rows - words.len();
            let mut words_padded = vec![""; offset];
            words.iter().for_each(|w| words_padded.push(w));

            words_padded.iter().enumerate().for_each(|(row, token)| {
                let row_string = &mut header_row_strings[row];
                *row_string = format!("{row_string}{:width$} ", token, width = width);
            });
            let rule_string = &mut header_row_strings[num_rows];
            *rule_string = format!("{rule_string}{} ", "-".repeat(width));
        };

        // the first column gets -2 to it's width to account for the "# "
        header_append_fn(&self.labels[0], self.widths[0] - 2);

        self.labels
            .iter()
            .skip(1)
            .zip(self.widths.iter().skip(1))
            .for_each(|(words, &width)| header_append_fn(words, width));

        Ok(header_row_strings
            .iter()
            .map(|row| row.trim_end())
            .collect::<Vec<_>>()
            .join("\n"))
    }

    pub fn row(&self, summary: &AlignmentSummary) -> String {
        let row = self
            .fields
            .iter()
            .zip(self.widths.iter())
            .map(|(field, &width)| format!("{:width$} ", field.value(summary), width = width))
            .collect::<String>();

        row.trim_end().to_string()
    }
}

pub fn write_tabular_output(summaries: &[AlignmentSummary], out: &mut impl Write) -> anyhow::Result<()> {
    let mut format = TableFormat::new(&Field::DEFAULT_FIELDS)?;
    summaries.iter().for_each(|s| format.update_widths(s));

    writeln!(out, "{}", format.header()?)?;
    for summary in summaries {
        writeln!(out, "{}", format.row(summary))?;
    }
    Ok(())
}
