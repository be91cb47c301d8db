//! Count cell coercion.

use a34_model::Cell;

/// Coerce a count cell to a non-negative integer.
///
/// Blank cells count as zero. Fractional values are truncated toward zero,
/// and numeric text (e.g. `"12"` or `"3.0"`) is parsed. Returns `None` for
/// negative, non-finite or non-numeric values.
pub fn coerce_count(cell: &Cell) -> Option<u64> {
    match cell {
        Cell::Empty => Some(0),
        Cell::Int(value) => u64::try_from(*value).ok(),
        Cell::Float(value) => float_count(*value),
        Cell::Text(text) => {
            let text = text.trim();
            if let Ok(value) = text.parse::<u64>() {
                return Some(value);
            }
            text.parse::<f64>().ok().and_then(float_count)
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn float_count(value: f64) -> Option<u64> {
    if !value.is_finite() || value < 0.0 || value >= u64::MAX as f64 {
        return None;
    }
    Some(value.trunc() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_is_zero() {
        assert_eq!(coerce_count(&Cell::Empty), Some(0));
    }

    #[test]
    fn test_numeric_cells() {
        assert_eq!(coerce_count(&Cell::Int(5)), Some(5));
        assert_eq!(coerce_count(&Cell::Float(7.0)), Some(7));
        assert_eq!(coerce_count(&Cell::Float(2.9)), Some(2));
        assert_eq!(coerce_count(&Cell::text("12")), Some(12));
        assert_eq!(coerce_count(&Cell::text("3.0")), Some(3));
    }

    #[test]
    fn test_rejects_negative_and_non_numeric() {
        assert_eq!(coerce_count(&Cell::Int(-1)), None);
        assert_eq!(coerce_count(&Cell::Float(-0.5)), None);
        assert_eq!(coerce_count(&Cell::Float(f64::NAN)), None);
        assert_eq!(coerce_count(&Cell::text("n/a")), None);
        assert_eq!(coerce_count(&Cell::text("--")), None);
    }
}
