//! Wide-to-long reshaping of one section.

use a34_model::{Cell, EncodedColumn, TidyRecord};

use crate::coerce::coerce_count;
use crate::error::{Result, TidyError};
use crate::split::Section;

/// Melt a sanitized section into tidy records.
///
/// The first column is the country identifier; every other column is an
/// encoded year column. Records are emitted column by column, and within a
/// column in row order. Counts are coerced for the whole section before any
/// column label is decoded.
///
/// # Errors
///
/// - [`TidyError::InvalidCount`] if a count cell is not a non-negative number
/// - [`TidyError::Decode`] if a column label is not `<year>[.<suffix>]`
pub fn reshape_section(section: &Section) -> Result<Vec<TidyRecord>> {
    let table = &section.table;
    let countries: Vec<String> = table
        .rows
        .iter()
        .map(|row| row.first().map(Cell::as_text).unwrap_or_default())
        .collect();
    let value_labels = table.columns.get(1..).unwrap_or_default();

    let mut counts: Vec<Vec<u64>> = Vec::with_capacity(value_labels.len());
    for (offset, label) in value_labels.iter().enumerate() {
        let column = table
            .rows
            .iter()
            .zip(&countries)
            .map(|(row, country)| {
                let cell = &row[offset + 1];
                coerce_count(cell).ok_or_else(|| TidyError::InvalidCount {
                    grounds: section.grounds.clone(),
                    country: country.clone(),
                    column: label.clone(),
                    value: cell.as_text(),
                })
            })
            .collect::<Result<Vec<u64>>>()?;
        counts.push(column);
    }

    let mut records = Vec::with_capacity(value_labels.len() * countries.len());
    for (label, column_counts) in value_labels.iter().zip(counts) {
        let encoded = EncodedColumn::parse(label).map_err(|source| TidyError::Decode {
            grounds: section.grounds.clone(),
            source,
        })?;
        for (country, count) in countries.iter().zip(column_counts) {
            records.push(TidyRecord::new(&section.grounds, country, encoded, count));
        }
    }
    tracing::debug!(
        grounds = %section.grounds,
        records = records.len(),
        "reshaped section"
    );
    Ok(records)
}
