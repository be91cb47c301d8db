//! Removal of generated and aggregate columns.

use a34_model::RawTable;

use crate::split::Section;

/// Substrings that mark a column for removal: `Unnamed` for spacer columns
/// the reader labelled itself, `Total` for subtotal columns.
pub const DROPPED_COLUMN_MARKERS: [&str; 2] = ["Unnamed", "Total"];

/// Returns true if the column label contains a dropped-column marker.
///
/// Matching is case-sensitive.
pub fn is_generated_column(label: &str) -> bool {
    DROPPED_COLUMN_MARKERS
        .iter()
        .any(|marker| label.contains(marker))
}

/// Drop generated and total columns from a section, keeping column order.
pub fn sanitize_section(section: Section) -> Section {
    let Section {
        grounds,
        table,
        source_rows,
    } = section;
    let keep: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .filter(|(_, label)| !is_generated_column(label))
        .map(|(idx, _)| idx)
        .collect();

    let dropped = table.width() - keep.len();
    if dropped > 0 {
        tracing::debug!(grounds = %grounds, dropped, "dropped generated columns");
    }

    let mut sanitized = RawTable::new(keep.iter().map(|&idx| table.columns[idx].clone()).collect());
    for mut row in table.rows {
        let cells = keep
            .iter()
            .map(|&idx| std::mem::take(&mut row[idx]))
            .collect();
        sanitized.push_row(cells);
    }
    Section {
        grounds,
        table: sanitized,
        source_rows,
    }
}
