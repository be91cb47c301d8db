//! CSV rendering and atomic file replacement.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use polars::prelude::{CsvWriter, DataFrame, SerWriter};

use crate::error::{OutputError, Result};

/// Render a frame as comma-delimited text with a header row and no index.
pub fn render_csv(df: &mut DataFrame) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    CsvWriter::new(&mut buffer)
        .include_header(true)
        .with_separator(b',')
        .finish(df)?;
    Ok(buffer)
}

/// Render a frame and write it to `path` atomically.
pub fn write_csv_atomic(df: &mut DataFrame, path: &Path) -> Result<()> {
    let bytes = render_csv(df)?;
    write_bytes_atomic(&bytes, path)?;
    tracing::info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote csv"
    );
    Ok(())
}

/// Create the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| OutputError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    Ok(())
}

/// Write `bytes` to `path` via a sibling temp file and a rename.
///
/// The temp file is removed if any step fails.
pub fn write_bytes_atomic(bytes: &[u8], path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let temp_path = temp_path_for(path);
    let result = write_and_sync(bytes, &temp_path).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| OutputError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: path.to_path_buf(),
            source: e,
        })
    });
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_and_sync(bytes: &[u8], temp_path: &Path) -> Result<()> {
    let mut file = File::create(temp_path).map_err(|e| OutputError::Io {
        operation: "create",
        path: temp_path.to_path_buf(),
        source: e,
    })?;
    file.write_all(bytes).map_err(|e| OutputError::Io {
        operation: "write",
        path: temp_path.to_path_buf(),
        source: e,
    })?;
    file.sync_all().map_err(|e| OutputError::Io {
        operation: "sync",
        path: temp_path.to_path_buf(),
        source: e,
    })
}

/// `dir/name.csv` -> `dir/name.csv.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".tmp");
    path.with_file_name(name)
}
