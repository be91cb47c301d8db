//! Data ingestion for the A34 toolkit.
//!
//! # Features
//!
//! - **Sheet reading**: load the A34 refusal spreadsheet (workbook or CSV
//!   export), strip the metadata header/footer block and hand back a
//!   [`RawTable`](a34_model::RawTable)
//! - **Corpus access**: load a named partition of the legal-document corpus
//!   into a Polars `DataFrame`
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use a34_ingest::{LocalCorpus, CorpusSource, SheetLayout, read_raw_table};
//!
//! let table = read_raw_table(Path::new("data/raw/a34_1_refused.xlsx"), &SheetLayout::default())?;
//! let corpus = LocalCorpus::new("data/raw/canadian-legal-data");
//! let documents = corpus.load("FC")?;
//! ```

mod corpus;
mod error;
mod sheet;

// === Error Types ===
pub use error::{IngestError, Result};

// === Sheet Reading ===
pub use sheet::{
    DEFAULT_SKIP_FOOTER, DEFAULT_SKIP_HEADER, SheetFormat, SheetLayout, WORKBOOK_EXTENSIONS,
    column_labels, dedupe_labels, read_raw_table, table_from_grid,
};

// === Corpus Access ===
pub use corpus::{CorpusSource, LocalCorpus};
