//! Column label normalization for the sheet header row.

use std::collections::HashMap;

use a34_model::Cell;

/// Build column labels from a header row.
///
/// Blank header cells become `Unnamed: <index>`, integral numbers render as
/// integers (`2019`, not `2019.0`) and repeated labels are disambiguated by
/// [`dedupe_labels`]. Cells past the end of the header row count as blank.
pub fn column_labels(header: &[Cell], width: usize) -> Vec<String> {
    let labels = (0..width.max(header.len()))
        .map(|idx| match header.get(idx) {
            Some(cell) if !cell.is_empty() => normalize_label(&cell.as_text()),
            _ => format!("Unnamed: {idx}"),
        })
        .collect();
    dedupe_labels(labels)
}

/// Append `.1`, `.2`, … to repeated labels.
///
/// The first occurrence keeps its label. A generated label that itself
/// collides with an existing one is suffixed again, so the result is always
/// unique. The A34 sheet repeats every year four times, which yields the
/// encoded `2019`, `2019.1`, `2019.2`, `2019.3` columns.
pub fn dedupe_labels(labels: Vec<String>) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::with_capacity(labels.len());
    let mut deduped = Vec::with_capacity(labels.len());
    for label in labels {
        let mut current = label;
        let mut seen = counts.get(&current).copied().unwrap_or(0);
        while seen > 0 {
            counts.insert(current.clone(), seen + 1);
            current = format!("{current}.{seen}");
            seen = counts.get(&current).copied().unwrap_or(0);
        }
        counts.insert(current.clone(), seen + 1);
        deduped.push(current);
    }
    deduped
}

fn normalize_label(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn test_dedupe_repeated_years() {
        let deduped = dedupe_labels(labels(&["2019", "2019", "2019", "2019", "2020"]));
        assert_eq!(deduped, labels(&["2019", "2019.1", "2019.2", "2019.3", "2020"]));
    }

    #[test]
    fn test_dedupe_avoids_existing_suffixed_label() {
        let deduped = dedupe_labels(labels(&["2019.1", "2019", "2019"]));
        assert_eq!(deduped, labels(&["2019.1", "2019", "2019.1.1"]));
    }

    #[test]
    fn test_column_labels_blank_and_numeric_cells() {
        let header = vec![
            Cell::Empty,
            Cell::Float(2019.0),
            Cell::Int(2019),
            Cell::text(" Grand   Total "),
        ];
        let labels = column_labels(&header, 5);
        assert_eq!(
            labels,
            vec!["Unnamed: 0", "2019", "2019.1", "Grand Total", "Unnamed: 4"]
        );
    }
}
