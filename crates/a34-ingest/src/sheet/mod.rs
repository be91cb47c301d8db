//! A34 spreadsheet reading.
//!
//! The published refusal workbook wraps the data block in metadata: a title
//! block of [`DEFAULT_SKIP_HEADER`] rows above the column header row and a
//! notes block of [`DEFAULT_SKIP_FOOTER`] rows below the last data row. This
//! module strips both and returns the remaining rows as a [`RawTable`].

mod header;
mod reader;

use std::path::Path;

use a34_model::{Cell, RawTable};

use crate::error::{IngestError, Result};

pub use header::{column_labels, dedupe_labels};
pub use reader::{SheetFormat, WORKBOOK_EXTENSIONS};

/// Leading metadata rows above the column header row.
pub const DEFAULT_SKIP_HEADER: usize = 5;

/// Trailing metadata rows below the data block.
pub const DEFAULT_SKIP_FOOTER: usize = 8;

/// Position of the data block inside the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    /// Rows to discard before the column header row.
    pub skip_header: usize,
    /// Rows to discard at the end of the sheet.
    pub skip_footer: usize,
    /// Worksheet name (first sheet when `None`). Ignored for CSV sources.
    pub sheet: Option<String>,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            skip_header: DEFAULT_SKIP_HEADER,
            skip_footer: DEFAULT_SKIP_FOOTER,
            sheet: None,
        }
    }
}

impl SheetLayout {
    /// Rows the sheet must contain: both metadata blocks plus the header row.
    pub fn required_rows(&self) -> usize {
        self.skip_header + 1 + self.skip_footer
    }
}

/// Read the A34 data block from a workbook or CSV export.
///
/// # Errors
///
/// Fails when the file is missing or unreadable, the extension is not a
/// supported format, the sheet does not exist, or the sheet has fewer rows
/// than [`SheetLayout::required_rows`].
pub fn read_raw_table(path: &Path, layout: &SheetLayout) -> Result<RawTable> {
    let grid = match SheetFormat::detect(path)? {
        SheetFormat::Workbook => reader::read_workbook_grid(path, layout.sheet.as_deref())?,
        SheetFormat::Csv => reader::read_csv_grid(path)?,
    };
    let table = table_from_grid(grid, layout, path)?;
    tracing::info!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        "loaded raw table"
    );
    Ok(table)
}

/// Cut the data block out of a full-sheet cell grid.
///
/// The row after the header block supplies column labels (see
/// [`column_labels`]); fully blank data rows are dropped; every kept row is
/// padded to the table width.
pub fn table_from_grid(
    mut grid: Vec<Vec<Cell>>,
    layout: &SheetLayout,
    path: &Path,
) -> Result<RawTable> {
    let required = layout.required_rows();
    if grid.len() < required {
        return Err(IngestError::TooFewRows {
            path: path.to_path_buf(),
            rows: grid.len(),
            required,
        });
    }
    grid.truncate(grid.len() - layout.skip_footer);
    let mut rows = grid.into_iter().skip(layout.skip_header);
    let header = rows.next().unwrap_or_default();
    let data: Vec<Vec<Cell>> = rows.collect();

    let width = data
        .iter()
        .map(|row| trailing_trimmed_len(row))
        .chain(std::iter::once(trailing_trimmed_len(&header)))
        .max()
        .unwrap_or(0);
    let mut table = RawTable::new(column_labels(&header, width));

    let mut blank_rows = 0usize;
    for mut row in data {
        if row.iter().all(Cell::is_empty) {
            blank_rows += 1;
            continue;
        }
        row.truncate(table.width());
        table.push_row(row);
    }
    if blank_rows > 0 {
        tracing::debug!(
            path = %path.display(),
            blank_rows,
            "skipped blank rows"
        );
    }
    Ok(table)
}

/// Row length ignoring trailing empty cells.
fn trailing_trimmed_len(row: &[Cell]) -> usize {
    row.iter()
        .rposition(|cell| !cell.is_empty())
        .map_or(0, |idx| idx + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata_rows(count: usize) -> Vec<Vec<Cell>> {
        (0..count)
            .map(|idx| vec![Cell::text(format!("note {idx}"))])
            .collect()
    }

    #[test]
    fn test_table_from_grid_strips_metadata_blocks() {
        let layout = SheetLayout {
            skip_header: 2,
            skip_footer: 1,
            sheet: None,
        };
        let mut grid = metadata_rows(2);
        grid.push(vec![Cell::Empty, Cell::Int(2019), Cell::Int(2019)]);
        grid.push(vec![Cell::text("1. Security")]);
        grid.push(vec![Cell::text("Kenya"), Cell::Int(1), Cell::Int(2)]);
        grid.push(vec![Cell::Empty, Cell::Empty]);
        grid.extend(metadata_rows(1));

        let table = table_from_grid(grid, &layout, Path::new("a34.csv")).unwrap();

        assert_eq!(table.columns, vec!["Unnamed: 0", "2019", "2019.1"]);
        assert_eq!(table.height(), 2);
        assert_eq!(
            table.rows[0],
            vec![Cell::text("1. Security"), Cell::Empty, Cell::Empty]
        );
        assert_eq!(table.rows[1][2], Cell::Int(2));
    }

    #[test]
    fn test_table_from_grid_too_few_rows() {
        let result = table_from_grid(metadata_rows(10), &SheetLayout::default(), Path::new("x"));
        assert!(matches!(
            result,
            Err(IngestError::TooFewRows {
                rows: 10,
                required: 14,
                ..
            })
        ));
    }

    #[test]
    fn test_table_width_covers_data_wider_than_header() {
        let layout = SheetLayout {
            skip_header: 0,
            skip_footer: 0,
            sheet: None,
        };
        let grid = vec![
            vec![Cell::Empty, Cell::Int(2019)],
            vec![Cell::text("Kenya"), Cell::Int(1), Cell::Int(9)],
        ];
        let table = table_from_grid(grid, &layout, Path::new("x")).unwrap();
        assert_eq!(table.columns, vec!["Unnamed: 0", "2019", "Unnamed: 2"]);
    }
}
