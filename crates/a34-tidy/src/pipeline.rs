//! End-to-end tidy run: read, split, sanitize, reshape, assemble, write.

use std::path::{Path, PathBuf};

use a34_ingest::{SheetLayout, read_raw_table};
use a34_model::RawTable;
use a34_output::write_csv_atomic;

use crate::assemble::{TidyTable, assemble};
use crate::error::Result;
use crate::reshape::reshape_section;
use crate::sanitize::sanitize_section;
use crate::split::split_sections;

/// Per-section outcome of a tidy run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSummary {
    pub grounds: String,
    /// Country rows in the section.
    pub countries: usize,
    /// Encoded year columns kept after sanitizing.
    pub columns: usize,
    pub records: usize,
    pub total_count: u64,
}

/// Outcome of [`run_tidy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TidyReport {
    pub sections: Vec<SectionSummary>,
    pub records: usize,
    pub total_count: u64,
    pub output: PathBuf,
}

/// Transform an in-memory raw table into the tidy table.
///
/// # Errors
///
/// Propagates every malformed-input, count and decode error of the
/// individual stages.
pub fn tidy_raw_table(raw: &RawTable) -> Result<(TidyTable, Vec<SectionSummary>)> {
    let sections = split_sections(raw)?;
    let mut parts = Vec::with_capacity(sections.len());
    let mut summaries = Vec::with_capacity(sections.len());
    for section in sections {
        let section = sanitize_section(section);
        let records = reshape_section(&section)?;
        summaries.push(SectionSummary {
            grounds: section.grounds.clone(),
            countries: section.row_count(),
            columns: section.table.width().saturating_sub(1),
            records: records.len(),
            total_count: records.iter().map(|r| r.count).sum(),
        });
        parts.push(records);
    }
    let table = assemble(parts)?;
    Ok((table, summaries))
}

/// Read the A34 sheet at `input` and write its tidy form to `output`.
///
/// The output file is replaced atomically; on failure no file is written.
///
/// # Errors
///
/// Returns an error when the input cannot be read, the table is malformed,
/// or the output cannot be written.
pub fn run_tidy(input: &Path, output: &Path, layout: &SheetLayout) -> Result<TidyReport> {
    let raw = read_raw_table(input, layout)?;
    let (table, sections) = tidy_raw_table(&raw)?;
    let mut frame = table.to_frame()?;
    write_csv_atomic(&mut frame, output)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        sections = sections.len(),
        records = table.len(),
        "tidy complete"
    );
    Ok(TidyReport {
        records: table.len(),
        total_count: table.total_count(),
        sections,
        output: output.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use a34_model::Cell;

    use super::*;
    use crate::error::TidyError;

    #[test]
    fn test_tidy_raw_table_summaries() {
        let raw = RawTable::new(vec![
            "Unnamed: 0".into(),
            "2019".into(),
            "2019.1".into(),
            "Total".into(),
        ])
        .with_row(vec![Cell::text("1. Security")])
        .with_row(vec![
            Cell::text("Kenya"),
            Cell::Int(1),
            Cell::Int(2),
            Cell::Int(3),
        ])
        .with_row(vec![Cell::text("Chad"), Cell::Empty, Cell::Int(5), Cell::Int(5)]);

        let (table, summaries) = tidy_raw_table(&raw).unwrap();

        assert_eq!(table.len(), 4);
        assert_eq!(
            summaries,
            vec![SectionSummary {
                grounds: "1. Security".into(),
                countries: 2,
                columns: 2,
                records: 4,
                total_count: 8,
            }]
        );
    }

    #[test]
    fn test_tidy_raw_table_without_header_fails() {
        let raw = RawTable::new(vec!["Unnamed: 0".into(), "2019".into()])
            .with_row(vec![Cell::text("Kenya"), Cell::Int(1)]);
        assert!(matches!(tidy_raw_table(&raw), Err(TidyError::NoHeaderRow)));
    }
}
