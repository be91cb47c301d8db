//! Cell grid readers for workbook and CSV sources.

use std::path::Path;

use a34_model::Cell;
use calamine::{Data, Reader, open_workbook_auto};
use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// Workbook extensions handled by calamine.
pub const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Source format detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Workbook,
    Csv,
}

impl SheetFormat {
    pub fn detect(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if extension == "csv" {
            Ok(Self::Csv)
        } else if WORKBOOK_EXTENSIONS.contains(&extension.as_str()) {
            Ok(Self::Workbook)
        } else {
            Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    }
}

/// Read a worksheet into a row-major cell grid anchored at cell A1.
///
/// calamine trims leading blank rows and columns from the used range; they
/// are padded back so that row offsets match what a spreadsheet user sees.
pub fn read_workbook_grid(path: &Path, sheet: Option<&str>) -> Result<Vec<Vec<Cell>>> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let sheet_names = workbook.sheet_names();
    let sheet_name = match sheet {
        Some(name) if sheet_names.iter().any(|candidate| candidate == name) => name.to_string(),
        Some(name) => {
            return Err(IngestError::SheetNotFound {
                path: path.to_path_buf(),
                sheet: name.to_string(),
            });
        }
        None => sheet_names
            .first()
            .cloned()
            .ok_or_else(|| IngestError::NoSheets {
                path: path.to_path_buf(),
            })?,
    };
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let (row_offset, col_offset) = range
        .start()
        .map(|(row, col)| (row as usize, col as usize))
        .unwrap_or((0, 0));
    let mut grid: Vec<Vec<Cell>> = vec![Vec::new(); row_offset];
    for row in range.rows() {
        let mut cells = vec![Cell::Empty; col_offset];
        cells.extend(row.iter().map(data_to_cell));
        grid.push(cells);
    }
    tracing::debug!(
        path = %path.display(),
        sheet = %sheet_name,
        rows = grid.len(),
        "read worksheet"
    );
    Ok(grid)
}

/// Read a CSV export into a row-major cell grid.
pub fn read_csv_grid(path: &Path) -> Result<Vec<Vec<Cell>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;
    let mut grid = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(path, e))?;
        grid.push(record.iter().map(parse_csv_cell).collect());
    }
    Ok(grid)
}

fn csv_error(path: &Path, err: csv::Error) -> IngestError {
    if let csv::ErrorKind::Io(io) = err.kind()
        && io.kind() == std::io::ErrorKind::NotFound
    {
        return IngestError::FileNotFound {
            path: path.to_path_buf(),
        };
    }
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::Int(value) => Cell::Int(*value),
        Data::Float(value) => Cell::Float(*value),
        Data::String(value) => Cell::text(value.as_str()),
        other => Cell::text(other.to_string()),
    }
}

/// Interpret a CSV field the way a spreadsheet would: numbers become numeric
/// cells, blanks become empty.
pub fn parse_csv_cell(raw: &str) -> Cell {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        return Cell::Empty;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Cell::Int(value);
    }
    if let Ok(value) = trimmed.parse::<f64>()
        && value.is_finite()
    {
        return Cell::Float(value);
    }
    Cell::text(trimmed)
}
