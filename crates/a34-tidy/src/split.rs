//! Section splitting.
//!
//! The A34 sheet stacks one block per inadmissibility ground. Each block
//! starts with a header row whose first cell is the numbered ground (e.g.
//! `"1. Security"`) and continues with one row per country until the next
//! header. Country names never contain digits, which is what tells the two
//! kinds of rows apart.

use a34_model::{COUNTRY_COLUMN, Cell, RawTable};

use crate::error::{Result, TidyError};

/// Rows of one inadmissibility ground.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Label of the header row that opened the section.
    pub grounds: String,
    /// Data rows, with the label column renamed to `country`.
    pub table: RawTable,
    /// Index of every data row in the source table, in order.
    pub source_rows: Vec<usize>,
}

impl Section {
    pub fn row_count(&self) -> usize {
        self.table.height()
    }
}

/// Returns true if the row is a section header.
pub fn is_header_row(row: &[Cell]) -> bool {
    row.first().is_some_and(Cell::contains_digit)
}

/// Walk state of the splitter.
enum SplitState {
    /// No header seen yet; any data row here is malformed input.
    SeekingHeader,
    /// Inside a section opened by the header at `header_row`.
    Collecting {
        grounds: String,
        header_row: usize,
        rows: Vec<Vec<Cell>>,
        source_rows: Vec<usize>,
    },
}

impl SplitState {
    /// Close the current section, keeping it only if it has data rows.
    fn close(self, columns: &[String], sections: &mut Vec<Section>) {
        let SplitState::Collecting {
            grounds,
            header_row,
            rows,
            source_rows,
        } = self
        else {
            return;
        };
        if rows.is_empty() {
            tracing::warn!(grounds = %grounds, header_row, "skipping empty section");
            return;
        }
        let mut table = RawTable::new(columns.to_vec());
        for row in rows {
            table.push_row(row);
        }
        tracing::debug!(grounds = %grounds, rows = table.height(), "collected section");
        sections.push(Section {
            grounds,
            table,
            source_rows,
        });
    }
}

/// Partition a raw table into labelled sections.
///
/// Every data row lands in exactly one section, in source order. Header rows
/// carry only the label and are not data. Sections without data rows (two
/// adjacent headers, a trailing header) are skipped.
///
/// # Errors
///
/// - [`TidyError::NoHeaderRow`] if no row is a header
/// - [`TidyError::DataBeforeHeader`] if data precedes the first header
/// - [`TidyError::MissingLabel`] if a row has an empty first cell
/// - [`TidyError::NoData`] if every section is empty
pub fn split_sections(table: &RawTable) -> Result<Vec<Section>> {
    if !table.rows.iter().any(|row| is_header_row(row)) {
        return Err(TidyError::NoHeaderRow);
    }

    let mut columns = table.columns.clone();
    if let Some(first) = columns.first_mut() {
        *first = COUNTRY_COLUMN.to_string();
    }

    let mut sections = Vec::new();
    let mut state = SplitState::SeekingHeader;
    for (idx, row) in table.rows.iter().enumerate() {
        let label = row.first().cloned().unwrap_or_default();
        if label.is_empty() {
            return Err(TidyError::MissingLabel { row: idx });
        }
        if label.contains_digit() {
            state.close(&columns, &mut sections);
            state = SplitState::Collecting {
                grounds: label.as_text(),
                header_row: idx,
                rows: Vec::new(),
                source_rows: Vec::new(),
            };
            continue;
        }
        match &mut state {
            SplitState::SeekingHeader => {
                return Err(TidyError::DataBeforeHeader {
                    row: idx,
                    label: label.as_text(),
                });
            }
            SplitState::Collecting {
                rows, source_rows, ..
            } => {
                rows.push(row.clone());
                source_rows.push(idx);
            }
        }
    }
    state.close(&columns, &mut sections);

    if sections.is_empty() {
        return Err(TidyError::NoData);
    }
    tracing::info!(sections = sections.len(), "split sections");
    Ok(sections)
}
