use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{add_session, evt, setup_data_dir, temp_out};

#[test]
fn test_export_csv_header_and_rows() {
    let dir = setup_data_dir("export_csv");
    let out = temp_out("export_csv", "csv");

    add_session(&dir, "2025-09-01", "500");
    add_session(&dir, "2025-09-15", "700");

    evt()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "export",
            "--format",
            "csv",
            "--file",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("csv file");
    let mut lines = content.lines();

    assert_eq!(
        lines.next().expect("header"),
        "Date,Cost (JPY),Start %,End %,kWh,Type"
    );
    assert!(content.contains("2025-09-01,500,20,80,45,"));
    assert!(content.contains("2025-09-15,700,20,80,45,"));
    // Oldest first.
    let body: Vec<&str> = content.lines().skip(1).collect();
    assert!(body[0].starts_with("2025-09-01"));
}

#[test]
fn test_export_json_pretty() {
    let dir = setup_data_dir("export_json");
    let out = temp_out("export_json", "json");

    add_session(&dir, "2025-09-01", "500");

    evt()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "export",
            "--format",
            "json",
            "--file",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("json file");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let records = parsed.as_array().expect("array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["date"], "2025-09-01");
    assert_eq!(records[0]["cost"], 500.0);
    assert_eq!(records[0]["start_percent"], 20);
}

#[test]
fn test_export_range_filters_sessions() {
    let dir = setup_data_dir("export_range");
    let out = temp_out("export_range", "csv");

    add_session(&dir, "2025-08-31", "300");
    add_session(&dir, "2025-09-15", "500");

    evt()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--range",
            "2025-09",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("csv file");
    assert!(content.contains("2025-09-15"));
    assert!(!content.contains("2025-08-31"));
}

#[test]
fn test_export_relative_path_rejected() {
    let dir = setup_data_dir("export_relpath");

    add_session(&dir, "2025-09-01", "500");

    evt()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "export",
            "--file",
            "out.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let dir = setup_data_dir("export_force");
    let out = temp_out("export_force", "csv");

    add_session(&dir, "2025-09-01", "500");

    fs::write(&out, "old contents").expect("seed file");

    evt()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "export",
            "--file",
            &out,
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("csv file");
    assert!(content.starts_with("Date,Cost (JPY)"));
}

#[test]
fn test_export_empty_range_warns_and_writes_nothing() {
    let dir = setup_data_dir("export_empty");
    let out = temp_out("export_empty", "csv");

    add_session(&dir, "2025-09-01", "500");

    evt()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "export",
            "--file",
            &out,
            "--range",
            "2030",
        ])
        .assert()
        .success()
        .stdout(contains("No sessions found").or(contains("no sessions found")));

    assert!(!std::path::Path::new(&out).exists());
}
