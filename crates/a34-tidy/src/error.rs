//! Error types for the tidy transformation.

use std::path::PathBuf;

use a34_ingest::IngestError;
use a34_model::ModelError;
use a34_output::OutputError;
use thiserror::Error;

/// Errors that can occur while tidying the A34 table.
///
/// Malformed input and decode errors abort the run: a silently skipped row
/// or column would skew every downstream total.
#[derive(Debug, Error)]
pub enum TidyError {
    // === Malformed Input ===
    /// No row carries a section header label.
    #[error("no section header row found (expected a first-column label containing a digit)")]
    NoHeaderRow,

    /// Data rows appear before the first section header.
    #[error("row {row} ('{label}') appears before the first section header")]
    DataBeforeHeader { row: usize, label: String },

    /// A non-blank row has an empty first column.
    #[error("row {row} has no label in the first column")]
    MissingLabel { row: usize },

    /// Every section was empty.
    #[error("no data rows found under any section header")]
    NoData,

    /// A count cell is neither blank nor a non-negative number.
    #[error("section '{grounds}', country '{country}', column '{column}': invalid count '{value}'")]
    InvalidCount {
        grounds: String,
        country: String,
        column: String,
        value: String,
    },

    /// The same (grounds, country, year, cor_status, resident) appears twice.
    #[error(
        "duplicate observation for '{grounds}' / '{country}' / {year} / {cor_status} / {resident}"
    )]
    DuplicateKey {
        grounds: String,
        country: String,
        year: i32,
        cor_status: String,
        resident: String,
    },

    // === Decode Errors ===
    /// A value column label is not a valid `<year>[.<suffix>]`.
    #[error("section '{grounds}': {source}")]
    Decode {
        grounds: String,
        #[source]
        source: ModelError,
    },

    // === I/O ===
    /// Reading the source spreadsheet failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Writing the tidy file failed.
    #[error(transparent)]
    Output(#[from] OutputError),

    /// A tidy CSV could not be read back.
    #[error("failed to read tidy CSV {path}: {message}")]
    TidyCsv { path: PathBuf, message: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TidyError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for tidy operations.
pub type Result<T> = std::result::Result<T, TidyError>;
