//! Error types for data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading source spreadsheets or the corpus.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension is not a supported spreadsheet or corpus format.
    #[error("unsupported file format: {path}")]
    UnsupportedFormat { path: PathBuf },

    // === Spreadsheet Errors ===
    /// Workbook could not be opened or decoded.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Requested worksheet does not exist.
    #[error("sheet '{sheet}' not found in {path}")]
    SheetNotFound { path: PathBuf, sheet: String },

    /// Workbook has no worksheets.
    #[error("workbook has no sheets: {path}")]
    NoSheets { path: PathBuf },

    /// Failed to parse a CSV export.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Sheet is too short to hold the metadata block plus a header row.
    #[error("{path} has {rows} rows, layout needs at least {required}")]
    TooFewRows {
        path: PathBuf,
        rows: usize,
        required: usize,
    },

    // === Corpus Errors ===
    /// No partition file exists for the requested dataset.
    #[error("corpus dataset '{dataset}' not available under {root}")]
    CorpusUnavailable { dataset: String, root: PathBuf },

    /// Dataset name cannot be used as a partition name.
    #[error("invalid dataset name '{name}'")]
    InvalidDatasetName { name: String },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

impl IngestError {
    /// Map an I/O error on `path` to `FileNotFound` or `FileRead`.
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
