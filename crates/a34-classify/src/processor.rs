//! Corpus partition processing: filter, classify, write.

use std::path::{Path, PathBuf};

use a34_ingest::CorpusSource;
use a34_model::{
    Category, DOCUMENT_OUTPUT_COLUMNS, DOCUMENT_TEXT_COLUMN, LegalDocument, any_to_string,
};
use a34_output::write_csv_atomic;
use polars::prelude::{AnyValue, BooleanChunked, Column, DataFrame, DataType, NamedFrom, Series};

use crate::classifier::classify;
use crate::error::{ClassifyError, Result};

/// Phrase a document must contain (case-insensitively) to be kept.
///
/// It names the respondent in immigration matters, which separates them from
/// the rest of the case-law corpus.
pub const CORPUS_FILTER_PHRASE: &str = "Minister of Citizenship and Immigration";

/// Outcome of [`process_dataset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyReport {
    pub dataset: String,
    /// Documents in the partition before filtering.
    pub scanned: usize,
    /// Documents kept and written.
    pub documents: usize,
    /// Documents per label, in evaluation order.
    pub label_counts: Vec<(Category, usize)>,
    pub output: PathBuf,
}

/// Output file name for a partition: `<dataset>_data.csv`.
pub fn output_file_name(dataset: &str) -> String {
    format!("{dataset}_data.csv")
}

/// Keep immigration documents of a partition and classify each one.
///
/// Rows whose text is missing never match the filter.
///
/// # Errors
///
/// Returns [`ClassifyError::MissingColumn`] when the frame lacks one of the
/// metadata or text columns.
pub fn process_corpus(df: &DataFrame, dataset: &str) -> Result<Vec<LegalDocument>> {
    let metadata_columns = &DOCUMENT_OUTPUT_COLUMNS[..DOCUMENT_OUTPUT_COLUMNS.len() - 1];
    for column in metadata_columns {
        if df.column(column).is_err() {
            return Err(ClassifyError::MissingColumn {
                dataset: dataset.to_string(),
                column: (*column).to_string(),
            });
        }
    }

    let texts = df.column(DOCUMENT_TEXT_COLUMN)?.cast(&DataType::String)?;
    let phrase = CORPUS_FILTER_PHRASE.to_lowercase();
    let mask: BooleanChunked = texts
        .str()?
        .into_iter()
        .map(|text| Some(text.is_some_and(|t| t.to_lowercase().contains(&phrase))))
        .collect();
    let kept = df.filter(&mask)?;
    tracing::debug!(
        dataset,
        scanned = df.height(),
        kept = kept.height(),
        "filtered corpus"
    );

    let columns = metadata_columns
        .iter()
        .map(|name| kept.column(name))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let cell =
        |column: &Column, idx: usize| any_to_string(column.get(idx).unwrap_or(AnyValue::Null));

    let documents = (0..kept.height())
        .map(|idx| {
            let text = cell(columns[6], idx);
            LegalDocument {
                citation: cell(columns[0], idx),
                dataset: cell(columns[1], idx),
                year: cell(columns[2], idx),
                language: cell(columns[3], idx),
                document_date: cell(columns[4], idx),
                source_url: cell(columns[5], idx),
                inadmissibility_reason: classify(&text),
                text,
            }
        })
        .collect();
    Ok(documents)
}

/// Build the output frame, one string column per output column.
pub fn documents_frame(documents: &[LegalDocument]) -> Result<DataFrame> {
    let field = |name: &str, get: fn(&LegalDocument) -> String| -> Column {
        Series::new(name.into(), documents.iter().map(get).collect::<Vec<String>>()).into()
    };
    let [citation, dataset, year, language, document_date, source_url, text, reason] =
        DOCUMENT_OUTPUT_COLUMNS;
    let columns = vec![
        field(citation, |d| d.citation.clone()),
        field(dataset, |d| d.dataset.clone()),
        field(year, |d| d.year.clone()),
        field(language, |d| d.language.clone()),
        field(document_date, |d| d.document_date.clone()),
        field(source_url, |d| d.source_url.clone()),
        field(text, |d| d.text.clone()),
        field(reason, |d| d.inadmissibility_reason.to_string()),
    ];
    Ok(DataFrame::new(columns)?)
}

/// Documents per label, in evaluation order. Unused labels count zero.
pub fn label_frequencies(documents: &[LegalDocument]) -> Vec<(Category, usize)> {
    Category::ALL
        .iter()
        .map(|&category| {
            let count = documents
                .iter()
                .filter(|d| d.inadmissibility_reason.contains(category))
                .count();
            (category, count)
        })
        .collect()
}

/// Load, classify and write one corpus partition to
/// `<output_dir>/<dataset>_data.csv`.
///
/// # Errors
///
/// Returns an error when the partition is unavailable or malformed, or the
/// output cannot be written.
pub fn process_dataset(
    source: &impl CorpusSource,
    dataset: &str,
    output_dir: &Path,
) -> Result<ClassifyReport> {
    let df = source.load(dataset)?;
    let documents = process_corpus(&df, dataset)?;
    let mut frame = documents_frame(&documents)?;
    let output = output_dir.join(output_file_name(dataset));
    write_csv_atomic(&mut frame, &output)?;

    tracing::info!(
        dataset,
        scanned = df.height(),
        documents = documents.len(),
        output = %output.display(),
        "classification complete"
    );
    Ok(ClassifyReport {
        dataset: dataset.to_string(),
        scanned: df.height(),
        documents: documents.len(),
        label_counts: label_frequencies(&documents),
        output,
    })
}
