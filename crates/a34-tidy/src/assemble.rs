//! Concatenation of reshaped sections into the tidy table.

use std::collections::HashSet;

use a34_model::{TIDY_COLUMNS, TidyRecord};
use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use crate::error::{Result, TidyError};

/// The assembled long-form table, in emission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TidyTable {
    records: Vec<TidyRecord>,
}

impl TidyTable {
    pub fn records(&self) -> &[TidyRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<TidyRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of every record count.
    pub fn total_count(&self) -> u64 {
        self.records.iter().map(|r| r.count).sum()
    }

    /// Build a frame with the canonical tidy column order.
    pub fn to_frame(&self) -> Result<DataFrame> {
        let [grounds, country, year, cor_status, resident, count] = TIDY_COLUMNS;
        let records = &self.records;
        let columns: Vec<Column> = vec![
            Series::new(
                grounds.into(),
                records
                    .iter()
                    .map(|r| r.inadmissibility_grounds.as_str())
                    .collect::<Vec<_>>(),
            )
            .into(),
            Series::new(
                country.into(),
                records.iter().map(|r| r.country.as_str()).collect::<Vec<_>>(),
            )
            .into(),
            Series::new(year.into(), records.iter().map(|r| r.year).collect::<Vec<i32>>()).into(),
            Series::new(
                cor_status.into(),
                records.iter().map(|r| r.cor_status.as_str()).collect::<Vec<_>>(),
            )
            .into(),
            Series::new(
                resident.into(),
                records.iter().map(|r| r.resident.as_str()).collect::<Vec<_>>(),
            )
            .into(),
            Series::new(count.into(), records.iter().map(|r| r.count).collect::<Vec<u64>>()).into(),
        ];
        Ok(DataFrame::new(columns)?)
    }
}

/// Concatenate per-section records in input order.
///
/// # Errors
///
/// Returns [`TidyError::DuplicateKey`] when two records share the natural key
/// (grounds, country, year, COR status, resident).
pub fn assemble(parts: Vec<Vec<TidyRecord>>) -> Result<TidyTable> {
    let records: Vec<TidyRecord> = parts.into_iter().flatten().collect();
    let mut seen = HashSet::with_capacity(records.len());
    for record in &records {
        if !seen.insert(record.natural_key()) {
            return Err(TidyError::DuplicateKey {
                grounds: record.inadmissibility_grounds.clone(),
                country: record.country.clone(),
                year: record.year,
                cor_status: record.cor_status.to_string(),
                resident: record.resident.to_string(),
            });
        }
    }
    Ok(TidyTable { records })
}

#[cfg(test)]
mod tests {
    use a34_model::EncodedColumn;

    use super::*;

    fn record(grounds: &str, country: &str, label: &str, count: u64) -> TidyRecord {
        TidyRecord::new(grounds, country, EncodedColumn::parse(label).unwrap(), count)
    }

    #[test]
    fn test_assemble_preserves_input_order() {
        let table = assemble(vec![
            vec![record("1. Security", "Kenya", "2019", 1)],
            vec![
                record("2. Criminality", "Chad", "2019", 2),
                record("2. Criminality", "Chad", "2019.1", 3),
            ],
        ])
        .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.total_count(), 6);
        assert_eq!(table.records()[0].country, "Kenya");
        assert_eq!(table.records()[2].count, 3);
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        let result = assemble(vec![
            vec![record("1. Security", "Kenya", "2019", 1)],
            vec![record("1. Security", "Kenya", "2019", 4)],
        ]);
        assert!(matches!(
            result,
            Err(TidyError::DuplicateKey { ref country, year: 2019, .. }) if country == "Kenya"
        ));
    }

    #[test]
    fn test_to_frame_column_order() {
        let table = assemble(vec![vec![record("1. Security", "Kenya", "2020.2", 7)]]).unwrap();
        let df = table.to_frame().unwrap();
        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, TIDY_COLUMNS);
        assert_eq!(df.height(), 1);
    }
}
