//! Data model for the A34 inadmissibility toolkit.
//!
//! # Module Organization
//!
//! - [`table`]: raw spreadsheet cells and the section-delimited [`RawTable`]
//! - [`record`]: encoded year columns and the long-form [`TidyRecord`]
//! - [`category`]: inadmissibility labels produced by the text classifier
//! - [`document`]: legal documents and the classified output layout
//! - [`any_value`]: Polars `AnyValue` helpers

pub mod any_value;
pub mod category;
pub mod document;
pub mod error;
pub mod record;
pub mod table;

pub use category::{Category, Classification};
pub use document::{DOCUMENT_OUTPUT_COLUMNS, DOCUMENT_TEXT_COLUMN, LegalDocument, REASON_COLUMN};
pub use error::{ModelError, Result};
pub use any_value::{any_to_string, format_numeric};
pub use record::{
    COUNTRY_COLUMN, CorStatus, EncodedColumn, GROUNDS_COLUMN, NaturalKey, Resident, TIDY_COLUMNS,
    TidyRecord,
};
pub use table::{Cell, RawTable};
