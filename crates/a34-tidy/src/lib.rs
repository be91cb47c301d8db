//! A34 tidy-data transformation.
//!
//! Turns the wide, section-delimited A34 refusal spreadsheet into one row per
//! observation:
//!
//! 1. **split**: partition rows into sections at digit-bearing header rows
//! 2. **sanitize**: drop generated `Unnamed`/`Total` columns
//! 3. **coerce**: fill blank counts with zero and cast to integers
//! 4. **reshape**: melt each section into [`TidyRecord`](a34_model::TidyRecord)s,
//!    decoding the year suffix into COR status and resident type
//! 5. **assemble**: concatenate, reject duplicate keys, write the CSV
//!
//! [`stats`] aggregates a written tidy table for reporting.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use a34_ingest::SheetLayout;
//! use a34_tidy::run_tidy;
//!
//! let report = run_tidy(
//!     Path::new("data/raw/a34_1_refused.xlsx"),
//!     Path::new("data/processed/a34_1_refused_cleaned.csv"),
//!     &SheetLayout::default(),
//! )?;
//! println!("{} records", report.records);
//! ```

mod assemble;
mod coerce;
mod error;
mod pipeline;
mod reshape;
mod sanitize;
mod split;

pub mod stats;

pub use assemble::{TidyTable, assemble};
pub use coerce::coerce_count;
pub use error::{Result, TidyError};
pub use pipeline::{SectionSummary, TidyReport, run_tidy, tidy_raw_table};
pub use reshape::reshape_section;
pub use sanitize::{DROPPED_COLUMN_MARKERS, is_generated_column, sanitize_section};
pub use split::{Section, is_header_row, split_sections};
pub use stats::{Dimension, GroupTotal, group_totals, read_tidy_csv};
