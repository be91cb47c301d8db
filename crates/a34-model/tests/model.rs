//! Integration tests for the A34 data model.

use a34_model::{
    Category, Cell, Classification, CorStatus, EncodedColumn, RawTable, Resident, TIDY_COLUMNS,
    TidyRecord,
};

#[test]
fn tidy_record_takes_flags_from_encoded_column() {
    let column = EncodedColumn::parse("2020.1").unwrap();
    let record = TidyRecord::new("1. Security", "Kenya", column, 4);

    assert_eq!(record.year, 2020);
    assert_eq!(record.cor_status, CorStatus::Canada);
    assert_eq!(record.resident, Resident::Permanent);
    assert_eq!(
        record.natural_key(),
        ("1. Security", "Kenya", 2020, CorStatus::Canada, Resident::Permanent)
    );
}

#[test]
fn tidy_columns_are_in_canonical_order() {
    assert_eq!(
        TIDY_COLUMNS,
        [
            "inadmissibility_grounds",
            "country",
            "year",
            "cor_status",
            "resident",
            "count"
        ]
    );
}

#[test]
fn raw_table_builder_keeps_row_order() {
    let table = RawTable::new(vec!["Unnamed: 0".into(), "2019".into()])
        .with_row(vec![Cell::text("1. Security")])
        .with_row(vec![Cell::text("Kenya"), Cell::Int(3)]);

    assert_eq!(table.height(), 2);
    assert_eq!(table.width(), 2);
    assert!(table.label_cell(0).unwrap().contains_digit());
    assert!(!table.label_cell(1).unwrap().contains_digit());
}

#[test]
fn category_order_starts_with_exclusion_and_ends_with_fallback() {
    assert_eq!(Category::ALL.first(), Some(&Category::Refugee));
    assert_eq!(Category::ALL.last(), Some(&Category::Other));
    let other = Classification::from_matches(std::iter::empty());
    assert_eq!(other.to_string(), "['other']");
}
