//! Error types for corpus classification.

use a34_ingest::IngestError;
use a34_output::OutputError;
use thiserror::Error;

/// Errors that can occur while classifying a corpus partition.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The partition lacks a column the output needs.
    #[error("dataset '{dataset}' is missing required column '{column}'")]
    MissingColumn { dataset: String, column: String },

    /// Loading the partition failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Writing the classified file failed.
    #[error(transparent)]
    Output(#[from] OutputError),

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for ClassifyError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for classification operations.
pub type Result<T> = std::result::Result<T, ClassifyError>;
