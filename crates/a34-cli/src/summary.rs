use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use a34_classify::{CATEGORY_RULES, ClassifyReport, EXCLUSION_RULE};
use a34_model::Category;
use a34_tidy::TidyReport;

use crate::cli::SummaryFormatArg;
use crate::types::SummaryResult;

pub fn print_tidy_summary(report: &TidyReport) {
    println!("Output: {}", report.output.display());
    println!("{}", tidy_table(report));
}

pub fn print_classify_summary(report: &ClassifyReport) {
    println!("Dataset: {}", report.dataset);
    println!("Output: {}", report.output.display());
    println!(
        "Documents: {} of {} matched the immigration filter",
        report.documents, report.scanned
    );
    println!("{}", label_table(report));
}

pub fn print_group_totals(result: &SummaryResult, format: SummaryFormatArg) -> Result<()> {
    match format {
        SummaryFormatArg::Json => {
            let json = serde_json::to_string_pretty(result).context("serialize summary")?;
            println!("{json}");
        }
        SummaryFormatArg::Table => {
            println!("Input: {}", result.input.display());
            if result.totals.len() < result.groups {
                println!(
                    "Showing {} of {} groups by {}",
                    result.totals.len(),
                    result.groups,
                    result.dimension
                );
            }
            println!("{}", group_table(result));
        }
    }
    Ok(())
}

pub fn print_categories() {
    println!("{}", categories_table());
}

fn tidy_table(report: &TidyReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Section"),
        header_cell("Countries"),
        header_cell("Columns"),
        header_cell("Records"),
        header_cell("Total"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for section in &report.sections {
        table.add_row(vec![
            Cell::new(&section.grounds)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(section.countries),
            Cell::new(section.columns),
            Cell::new(section.records),
            count_cell(section.total_count),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(report.records).add_attribute(Attribute::Bold),
        Cell::new(report.total_count).add_attribute(Attribute::Bold),
    ]);
    table
}

fn label_table(report: &ClassifyReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Label"), header_cell("Documents")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (category, count) in &report.label_counts {
        table.add_row(vec![Cell::new(category), count_cell(*count as u64)]);
    }
    table
}

fn group_table(result: &SummaryResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(&result.dimension),
        header_cell("Count"),
        header_cell("Share"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for total in &result.totals {
        table.add_row(vec![
            Cell::new(&total.key),
            count_cell(total.count),
            Cell::new(format!("{:.1}%", total.share * 100.0)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.total_count).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

fn categories_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Label"),
        header_cell("Role"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, category) in Category::ALL.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(category),
            role_cell(*category),
        ]);
    }
    table
}

fn role_cell(category: Category) -> Cell {
    if category == EXCLUSION_RULE.category {
        Cell::new("exclusion (overrides all)").fg(Color::Yellow)
    } else if CATEGORY_RULES.iter().any(|rule| rule.category == category) {
        Cell::new("category")
    } else {
        dim_cell("fallback")
    }
}

fn count_cell(count: u64) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}
