//! Flat-file output for the A34 toolkit.
//!
//! Every output is rendered fully in memory and then written through a
//! temp file in the destination directory followed by a rename, so a failed
//! run never leaves a truncated file at the destination path.

mod csv;
mod error;

pub use csv::{ensure_parent_dir, render_csv, write_bytes_atomic, write_csv_atomic};
pub use error::{OutputError, Result};
