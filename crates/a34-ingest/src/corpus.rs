//! Access to partitions of the legal-document corpus.

use std::fs::File;
use std::path::{Path, PathBuf};

use polars::prelude::{CsvReadOptions, DataFrame, ParquetReader, SerReader};

use crate::error::{IngestError, Result};

/// A source of named corpus partitions (e.g. `"FC"`, `"RAD"`).
pub trait CorpusSource {
    /// Load every document of the named partition.
    ///
    /// # Errors
    ///
    /// Returns a data-access error when the partition cannot be retrieved.
    fn load(&self, dataset: &str) -> Result<DataFrame>;
}

/// Corpus partitions stored as files under a local directory.
///
/// A partition `NAME` is looked up, in order, as `NAME.parquet`, `NAME.csv`
/// and `NAME/train.parquet` below the root.
#[derive(Debug, Clone)]
pub struct LocalCorpus {
    root: PathBuf,
}

impl LocalCorpus {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Candidate files for a partition, in lookup order.
    pub fn candidates(&self, dataset: &str) -> Vec<PathBuf> {
        vec![
            self.root.join(format!("{dataset}.parquet")),
            self.root.join(format!("{dataset}.csv")),
            self.root.join(dataset).join("train.parquet"),
        ]
    }

    fn resolve(&self, dataset: &str) -> Result<PathBuf> {
        validate_dataset_name(dataset)?;
        self.candidates(dataset)
            .into_iter()
            .find(|path| path.is_file())
            .ok_or_else(|| IngestError::CorpusUnavailable {
                dataset: dataset.to_string(),
                root: self.root.clone(),
            })
    }
}

impl CorpusSource for LocalCorpus {
    fn load(&self, dataset: &str) -> Result<DataFrame> {
        let path = self.resolve(dataset)?;
        let df = if path.extension().is_some_and(|ext| ext == "csv") {
            read_csv_partition(&path)?
        } else {
            read_parquet_partition(&path)?
        };
        tracing::info!(
            dataset,
            path = %path.display(),
            documents = df.height(),
            "loaded corpus partition"
        );
        Ok(df)
    }
}

fn validate_dataset_name(dataset: &str) -> Result<()> {
    let valid = !dataset.trim().is_empty()
        && dataset != "."
        && dataset != ".."
        && !dataset.contains(['/', '\\']);
    if valid {
        Ok(())
    } else {
        Err(IngestError::InvalidDatasetName {
            name: dataset.to_string(),
        })
    }
}

fn read_parquet_partition(path: &Path) -> Result<DataFrame> {
    let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    Ok(ParquetReader::new(file).finish()?)
}

fn read_csv_partition(path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}
