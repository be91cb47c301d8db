//! Error types for model-level decoding.

use thiserror::Error;

/// Errors raised while decoding model values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// The year part of an encoded column label is not an integer.
    #[error("column '{label}': year '{year}' is not an integer")]
    InvalidYear { label: String, year: String },

    /// The dotted suffix of an encoded column label is not 1, 2 or 3.
    #[error("column '{label}': unknown variant suffix '{suffix}'")]
    InvalidSuffix { label: String, suffix: String },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
