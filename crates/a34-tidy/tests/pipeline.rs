//! Integration tests for the tidy pipeline.

use std::fs;
use std::path::Path;

use a34_ingest::SheetLayout;
use a34_model::{Cell, CorStatus, RawTable, Resident};
use a34_tidy::{
    Dimension, TidyError, group_totals, read_tidy_csv, run_tidy, split_sections, tidy_raw_table,
};
use tempfile::tempdir;

fn a34_export() -> String {
    let mut lines = vec![
        "Temporary and Permanent Residents found inadmissible".to_string(),
        "Source: IRCC".to_string(),
        "Period: 2019".to_string(),
        ",COR Not Canada,COR Canada,COR Not Canada,COR Canada,".to_string(),
        ",PR,PR,TR,TR,".to_string(),
        ",2019,2019,2019,2019,Total".to_string(),
        "1. Security,,,,,".to_string(),
        "Kenya,1,0,2,,3".to_string(),
        "\"Somalia, Democratic Republic of\",4,1,0,0,5".to_string(),
        "2. Human or international rights violations,,,,,".to_string(),
        "3. Serious criminality,,,,,".to_string(),
        "Iraq,0,0,1,3,4".to_string(),
    ];
    lines.extend((1..=8).map(|idx| format!("Note {idx}")));
    lines.join("\n") + "\n"
}

#[test]
fn trailing_header_without_data_is_dropped() {
    let raw = RawTable::new(vec!["Unnamed: 0".into(), "2019".into()])
        .with_row(vec![Cell::text("1. Security")])
        .with_row(vec![Cell::text("CountryA"), Cell::Int(5)])
        .with_row(vec![Cell::text("2. Criminality")]);

    let sections = split_sections(&raw).unwrap();

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].grounds, "1. Security");
    assert_eq!(sections[0].table.height(), 1);
    assert_eq!(sections[0].table.rows[0][0], Cell::text("CountryA"));
}

#[test]
fn run_tidy_writes_canonical_csv() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("a34.csv");
    let output = dir.path().join("processed").join("a34_cleaned.csv");
    fs::write(&input, a34_export()).unwrap();

    let report = run_tidy(&input, &output, &SheetLayout::default()).unwrap();

    assert_eq!(report.sections.len(), 2);
    assert_eq!(report.records, 12);
    assert_eq!(report.total_count, 12);

    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0],
        "inadmissibility_grounds,country,year,cor_status,resident,count"
    );
    assert_eq!(
        lines[1],
        "1. Security,Kenya,2019,COR Not Canada,Permanent Resident,1"
    );
    assert_eq!(
        lines[2],
        "1. Security,\"Somalia, Democratic Republic of\",2019,COR Not Canada,Permanent Resident,4"
    );
    assert_eq!(
        lines[7],
        "1. Security,Kenya,2019,COR Canada,Temporary Resident,0"
    );
    assert_eq!(
        lines[12],
        "3. Serious criminality,Iraq,2019,COR Canada,Temporary Resident,3"
    );
    assert_eq!(lines.len(), 13);
}

#[test]
fn run_tidy_reads_workbook() {
    let input = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../a34-ingest/tests/fixtures/a34_sample.xlsx");
    let dir = tempdir().unwrap();
    let output = dir.path().join("a34_cleaned.csv");

    let report = run_tidy(&input, &output, &SheetLayout::default()).unwrap();

    assert_eq!(report.sections.len(), 2);
    assert_eq!(report.records, 8);
    assert_eq!(report.total_count, 7);

    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(
        lines[3],
        "1. Security,Kenya,2019,COR Not Canada,Temporary Resident,2"
    );
    assert_eq!(
        lines[4],
        "1. Security,Kenya,2019,COR Canada,Temporary Resident,0"
    );
    assert_eq!(
        lines[6],
        "2. Criminality,Chad,2019,COR Canada,Permanent Resident,3"
    );
    assert!(!text.contains("Total"));
}

#[test]
fn encoded_suffix_three_is_canada_temporary() {
    let raw = RawTable::new(vec!["Unnamed: 0".into(), "2019.3".into()])
        .with_row(vec![Cell::text("1. Security")])
        .with_row(vec![Cell::text("Kenya"), Cell::Int(2)]);

    let (table, _) = tidy_raw_table(&raw).unwrap();
    let record = &table.records()[0];

    assert_eq!(record.year, 2019);
    assert_eq!(record.cor_status, CorStatus::Canada);
    assert_eq!(record.resident, Resident::Temporary);
}

#[test]
fn running_twice_is_byte_identical() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("a34.csv");
    fs::write(&input, a34_export()).unwrap();
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    run_tidy(&input, &first, &SheetLayout::default()).unwrap();
    run_tidy(&input, &second, &SheetLayout::default()).unwrap();
    run_tidy(&input, &second, &SheetLayout::default()).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn duplicate_country_in_section_is_rejected() {
    let raw = RawTable::new(vec!["Unnamed: 0".into(), "2019".into()])
        .with_row(vec![Cell::text("1. Security")])
        .with_row(vec![Cell::text("Kenya"), Cell::Int(1)])
        .with_row(vec![Cell::text("Kenya"), Cell::Int(2)]);

    assert!(matches!(
        tidy_raw_table(&raw),
        Err(TidyError::DuplicateKey { .. })
    ));
}

#[test]
fn table_without_header_fails_and_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("a34.csv");
    let output = dir.path().join("out.csv");
    let mut lines: Vec<String> = (1..=5).map(|idx| format!("Title {idx}")).collect();
    lines.push(",2019".to_string());
    lines.push("Kenya,1".to_string());
    lines.extend((1..=8).map(|idx| format!("Note {idx}")));
    fs::write(&input, lines.join("\n") + "\n").unwrap();

    let result = run_tidy(&input, &output, &SheetLayout::default());

    assert!(matches!(result, Err(TidyError::NoHeaderRow)));
    assert!(!output.exists());
}

#[test]
fn summary_reads_back_written_table() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("a34.csv");
    let output = dir.path().join("a34_cleaned.csv");
    fs::write(&input, a34_export()).unwrap();
    run_tidy(&input, &output, &SheetLayout::default()).unwrap();

    let records = read_tidy_csv(&output).unwrap();
    let totals = group_totals(&records, Dimension::Grounds);

    assert_eq!(records.len(), 12);
    assert_eq!(totals[0].key, "1. Security");
    assert_eq!(totals[0].count, 8);
    assert_eq!(totals[1].key, "3. Serious criminality");
    assert_eq!(totals[1].count, 4);
}
