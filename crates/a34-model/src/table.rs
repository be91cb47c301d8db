//! Raw spreadsheet table as handed over by the sheet reader.
//!
//! A [`RawTable`] keeps the source layout untouched: the first column carries
//! either a section header (e.g. `"1. Security"`) or a country name, and the
//! remaining columns carry counts under encoded year labels.

use crate::any_value::format_numeric;

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    /// Build a text cell, mapping blank strings to [`Cell::Empty`].
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Self::Empty
        } else if trimmed.len() == value.len() {
            Self::Text(value)
        } else {
            Self::Text(trimmed.to_string())
        }
    }

    /// Returns true for empty cells.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Render the cell as display text (empty string for [`Cell::Empty`]).
    ///
    /// Integral floats render without a fractional part, so a header cell
    /// read as `2019.0` becomes `"2019"`.
    pub fn as_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Int(value) => value.to_string(),
            Self::Float(value) => format_numeric(*value),
            Self::Text(value) => value.clone(),
        }
    }

    /// Returns true if the rendered cell contains at least one ASCII digit.
    pub fn contains_digit(&self) -> bool {
        match self {
            Self::Empty => false,
            Self::Int(_) | Self::Float(_) => true,
            Self::Text(value) => value.chars().any(|ch| ch.is_ascii_digit()),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Wide, section-delimited table read from the source spreadsheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    /// Column labels, first column first.
    pub columns: Vec<String>,
    /// Data rows; every row has exactly `columns.len()` cells.
    pub rows: Vec<Vec<Cell>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding missing trailing cells with [`Cell::Empty`] and
    /// dropping cells beyond the header width.
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.columns.len(), Cell::Empty);
        self.rows.push(row);
    }

    /// Builder-style variant of [`RawTable::push_row`].
    #[must_use]
    pub fn with_row(mut self, row: Vec<Cell>) -> Self {
        self.push_row(row);
        self
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First-column cell of a row, if the row exists.
    pub fn label_cell(&self, row: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|cells| cells.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_cell_trims_and_maps_blank_to_empty() {
        assert_eq!(Cell::text("  Canada "), Cell::Text("Canada".to_string()));
        assert_eq!(Cell::text("   "), Cell::Empty);
        assert_eq!(Cell::text(""), Cell::Empty);
    }

    #[test]
    fn test_contains_digit() {
        assert!(Cell::text("1. Security").contains_digit());
        assert!(Cell::Int(2019).contains_digit());
        assert!(!Cell::text("Somalia, Democratic Republic of").contains_digit());
        assert!(!Cell::Empty.contains_digit());
    }

    #[test]
    fn test_as_text_formats_integral_floats() {
        assert_eq!(Cell::Float(2019.0).as_text(), "2019");
        assert_eq!(Cell::Float(2.5).as_text(), "2.5");
        assert_eq!(Cell::Int(7).as_text(), "7");
        assert_eq!(Cell::Empty.as_text(), "");
    }

    #[test]
    fn test_push_row_pads_and_truncates() {
        let mut table = RawTable::new(vec!["Unnamed: 0".into(), "2019".into(), "2020".into()]);
        table.push_row(vec![Cell::text("Kenya")]);
        table.push_row(vec![
            Cell::text("Chad"),
            Cell::Int(1),
            Cell::Int(2),
            Cell::Int(3),
        ]);

        assert_eq!(table.rows[0], vec![Cell::text("Kenya"), Cell::Empty, Cell::Empty]);
        assert_eq!(table.rows[1].len(), 3);
        assert_eq!(table.label_cell(1), Some(&Cell::text("Chad")));
        assert_eq!(table.label_cell(2), None);
    }
}
