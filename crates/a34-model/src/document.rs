//! Legal documents from the case-law corpus.

use crate::category::Classification;

/// Corpus column holding the document text.
pub const DOCUMENT_TEXT_COLUMN: &str = "unofficial_text";

/// Output column holding the classification.
pub const REASON_COLUMN: &str = "inadmissibility_reason";

/// Column layout of the classified output file.
pub const DOCUMENT_OUTPUT_COLUMNS: [&str; 8] = [
    "citation",
    "dataset",
    "year",
    "language",
    "document_date",
    "source_url",
    DOCUMENT_TEXT_COLUMN,
    REASON_COLUMN,
];

/// A classified legal document.
///
/// Metadata fields are kept as rendered text; the corpus mixes integer,
/// date and string types across partitions and the output is flat text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalDocument {
    pub citation: String,
    pub dataset: String,
    pub year: String,
    pub language: String,
    pub document_date: String,
    pub source_url: String,
    pub text: String,
    pub inadmissibility_reason: Classification,
}
