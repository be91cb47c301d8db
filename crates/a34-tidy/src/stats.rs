//! Aggregations over a written tidy table.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use a34_model::TidyRecord;
use serde::Serialize;

use crate::error::{Result, TidyError};

/// Tidy column to group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Grounds,
    Country,
    Year,
    CorStatus,
    Resident,
}

impl Dimension {
    pub const fn column(self) -> &'static str {
        match self {
            Self::Grounds => a34_model::GROUNDS_COLUMN,
            Self::Country => a34_model::COUNTRY_COLUMN,
            Self::Year => "year",
            Self::CorStatus => "cor_status",
            Self::Resident => "resident",
        }
    }

    fn key(self, record: &TidyRecord) -> String {
        match self {
            Self::Grounds => record.inadmissibility_grounds.clone(),
            Self::Country => record.country.clone(),
            Self::Year => record.year.to_string(),
            Self::CorStatus => record.cor_status.to_string(),
            Self::Resident => record.resident.to_string(),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Summed count of one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTotal {
    pub key: String,
    pub count: u64,
    /// Fraction of the grand total, `0.0` when the grand total is zero.
    pub share: f64,
}

/// Sum counts per value of `dimension`.
///
/// Groups are ordered by descending count with ties broken by key, except
/// [`Dimension::Year`], which is ordered chronologically.
#[allow(clippy::cast_precision_loss)]
pub fn group_totals(records: &[TidyRecord], dimension: Dimension) -> Vec<GroupTotal> {
    let mut sums: HashMap<String, (i32, u64)> = HashMap::new();
    for record in records {
        let entry = sums
            .entry(dimension.key(record))
            .or_insert((record.year, 0));
        entry.1 += record.count;
    }
    let grand_total: u64 = sums.values().map(|(_, count)| count).sum();

    let mut groups: Vec<(String, i32, u64)> = sums
        .into_iter()
        .map(|(key, (year, count))| (key, year, count))
        .collect();
    if dimension == Dimension::Year {
        groups.sort_by_key(|(_, year, _)| *year);
    } else {
        groups.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(&b.0)));
    }

    groups
        .into_iter()
        .map(|(key, _, count)| GroupTotal {
            key,
            count,
            share: if grand_total == 0 {
                0.0
            } else {
                count as f64 / grand_total as f64
            },
        })
        .collect()
}

/// Read a tidy CSV written by [`run_tidy`](crate::run_tidy).
///
/// # Errors
///
/// Returns [`TidyError::TidyCsv`] when the file cannot be opened or a row does
/// not match the tidy layout.
pub fn read_tidy_csv(path: &Path) -> Result<Vec<TidyRecord>> {
    let to_error = |message: String| TidyError::TidyCsv {
        path: path.to_path_buf(),
        message,
    };
    let mut reader = csv::Reader::from_path(path).map_err(|e| to_error(e.to_string()))?;
    let records = reader
        .deserialize::<TidyRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| to_error(e.to_string()))?;
    tracing::debug!(path = %path.display(), records = records.len(), "read tidy csv");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use a34_model::EncodedColumn;

    use super::*;

    fn record(grounds: &str, country: &str, label: &str, count: u64) -> TidyRecord {
        TidyRecord::new(grounds, country, EncodedColumn::parse(label).unwrap(), count)
    }

    fn sample() -> Vec<TidyRecord> {
        vec![
            record("1. Security", "Kenya", "2020", 2),
            record("1. Security", "Chad", "2019.1", 6),
            record("2. Criminality", "Kenya", "2019.2", 2),
        ]
    }

    #[test]
    fn test_group_by_country_orders_by_count() {
        let totals = group_totals(&sample(), Dimension::Country);
        let keys: Vec<(&str, u64)> = totals.iter().map(|t| (t.key.as_str(), t.count)).collect();
        assert_eq!(keys, vec![("Chad", 6), ("Kenya", 4)]);
        assert!((totals[0].share - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_group_by_year_is_chronological() {
        let totals = group_totals(&sample(), Dimension::Year);
        let keys: Vec<&str> = totals.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, vec!["2019", "2020"]);
        assert_eq!(totals[0].count, 8);
    }

    #[test]
    fn test_ties_break_by_key() {
        let records = vec![
            record("1. Security", "Kenya", "2019", 1),
            record("1. Security", "Chad", "2019", 1),
        ];
        let totals = group_totals(&records, Dimension::Country);
        assert_eq!(totals[0].key, "Chad");
    }

    #[test]
    fn test_zero_total_has_zero_share() {
        let totals = group_totals(&[record("1. Security", "Kenya", "2019", 0)], Dimension::Resident);
        assert_eq!(totals[0].key, "Permanent Resident");
        assert!(totals[0].share.abs() < f64::EPSILON);
    }

    #[test]
    fn test_read_tidy_csv_rejects_unknown_status() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tidy.csv");
        std::fs::write(
            &path,
            "inadmissibility_grounds,country,year,cor_status,resident,count\n\
             1. Security,Kenya,2019,COR Mars,Permanent Resident,1\n",
        )
        .unwrap();
        assert!(matches!(
            read_tidy_csv(&path),
            Err(TidyError::TidyCsv { .. })
        ));
    }
}
