//! Encoded year columns and the long-form tidy record.
//!
//! The source spreadsheet repeats every year four times. The reader
//! disambiguates the repeats with a dotted suffix (`2019`, `2019.1`,
//! `2019.2`, `2019.3`), and the suffix carries two independent flags:
//!
//! | suffix | COR status     | resident           |
//! |--------|----------------|--------------------|
//! | none   | COR Not Canada | Permanent Resident |
//! | `.1`   | COR Canada     | Permanent Resident |
//! | `.2`   | COR Not Canada | Temporary Resident |
//! | `.3`   | COR Canada     | Temporary Resident |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Identifier column holding the section label.
pub const GROUNDS_COLUMN: &str = "inadmissibility_grounds";

/// Identifier column holding the country of citizenship.
pub const COUNTRY_COLUMN: &str = "country";

/// Canonical column order of the tidy output.
pub const TIDY_COLUMNS: [&str; 6] = [
    GROUNDS_COLUMN,
    COUNTRY_COLUMN,
    "year",
    "cor_status",
    "resident",
    "count",
];

/// Country-of-residence designation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CorStatus {
    #[serde(rename = "COR Canada")]
    Canada,
    #[serde(rename = "COR Not Canada")]
    NotCanada,
}

impl CorStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Canada => "COR Canada",
            Self::NotCanada => "COR Not Canada",
        }
    }
}

impl fmt::Display for CorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resident type of the person found inadmissible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Resident {
    #[serde(rename = "Permanent Resident")]
    Permanent,
    #[serde(rename = "Temporary Resident")]
    Temporary,
}

impl Resident {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Permanent => "Permanent Resident",
            Self::Temporary => "Temporary Resident",
        }
    }
}

impl fmt::Display for Resident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded `<year>[.<suffix>]` column label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedColumn {
    pub year: i32,
    pub cor_status: CorStatus,
    pub resident: Resident,
}

impl EncodedColumn {
    /// Decode a column label such as `"2019"` or `"2019.3"`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidYear`] when the part before the dot is not
    /// an integer and [`ModelError::InvalidSuffix`] when the suffix is not one
    /// of `1`, `2` or `3`.
    pub fn parse(label: &str) -> Result<Self> {
        let trimmed = label.trim();
        let (year_part, suffix) = match trimmed.split_once('.') {
            Some((year, suffix)) => (year, Some(suffix)),
            None => (trimmed, None),
        };
        let year = year_part
            .parse::<i32>()
            .map_err(|_| ModelError::InvalidYear {
                label: label.to_string(),
                year: year_part.to_string(),
            })?;
        let (cor_canada, temporary) = match suffix {
            None => (false, false),
            Some("1") => (true, false),
            Some("2") => (false, true),
            Some("3") => (true, true),
            Some(other) => {
                return Err(ModelError::InvalidSuffix {
                    label: label.to_string(),
                    suffix: other.to_string(),
                });
            }
        };
        Ok(Self {
            year,
            cor_status: if cor_canada {
                CorStatus::Canada
            } else {
                CorStatus::NotCanada
            },
            resident: if temporary {
                Resident::Temporary
            } else {
                Resident::Permanent
            },
        })
    }
}

impl FromStr for EncodedColumn {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// One observation of the tidy table.
///
/// Field order matches [`TIDY_COLUMNS`], so the serde representation doubles
/// as the CSV layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TidyRecord {
    pub inadmissibility_grounds: String,
    pub country: String,
    pub year: i32,
    pub cor_status: CorStatus,
    pub resident: Resident,
    pub count: u64,
}

/// Borrowed natural key of a [`TidyRecord`].
pub type NaturalKey<'a> = (&'a str, &'a str, i32, CorStatus, Resident);

impl TidyRecord {
    pub fn new(grounds: &str, country: &str, column: EncodedColumn, count: u64) -> Self {
        Self {
            inadmissibility_grounds: grounds.to_string(),
            country: country.to_string(),
            year: column.year,
            cor_status: column.cor_status,
            resident: column.resident,
            count,
        }
    }

    /// (grounds, country, year, cor_status, resident).
    pub fn natural_key(&self) -> NaturalKey<'_> {
        (
            &self.inadmissibility_grounds,
            &self.country,
            self.year,
            self.cor_status,
            self.resident,
        )
    }
}
