use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{add_session, evt, setup_data_dir};

#[test]
fn test_account_mode_uses_sqlite() {
    let dir = setup_data_dir("account_sqlite");

    evt()
        .args([
            "--data-dir",
            &dir,
            "--account",
            "alice",
            "--test",
            "add",
            "--start",
            "20",
            "--end",
            "80",
            "--cost",
            "500",
            "--at",
            "2025-09-01",
        ])
        .assert()
        .success();

    assert!(Path::new(&dir).join("evtrack.sqlite").exists());

    evt()
        .args(["--data-dir", &dir, "--account", "alice", "--test", "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"));
}

#[test]
fn test_accounts_are_isolated() {
    let dir = setup_data_dir("account_isolation");

    evt()
        .args([
            "--data-dir",
            &dir,
            "--account",
            "alice",
            "--test",
            "add",
            "--start",
            "10",
            "--end",
            "60",
            "--cost",
            "300",
            "--at",
            "2025-09-01",
        ])
        .assert()
        .success();

    evt()
        .args(["--data-dir", &dir, "--account", "bob", "--test", "list"])
        .assert()
        .success()
        .stdout(contains("No sessions found"))
        .stdout(contains("2025-09-01").not());
}

#[test]
fn test_guest_file_untouched_by_account_use() {
    let dir = setup_data_dir("guest_untouched");

    // Guest data first.
    add_session(&dir, "2025-09-01", "500");

    let guest_file = Path::new(&dir).join("local.json");
    let before = fs::read(&guest_file).expect("guest file");

    // Account-mode work must not rewrite the guest file.
    evt()
        .args([
            "--data-dir",
            &dir,
            "--account",
            "alice",
            "--test",
            "add",
            "--start",
            "30",
            "--end",
            "90",
            "--cost",
            "700",
            "--at",
            "2025-09-02",
        ])
        .assert()
        .success();

    let after = fs::read(&guest_file).expect("guest file");
    assert_eq!(before, after);

    // And the guest view still shows only guest data.
    evt()
        .args(["--data-dir", &dir, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-02").not());
}

#[test]
fn test_log_records_account_mutations() {
    let dir = setup_data_dir("account_log");

    evt()
        .args([
            "--data-dir",
            &dir,
            "--account",
            "alice",
            "--test",
            "add",
            "--start",
            "20",
            "--end",
            "80",
            "--cost",
            "500",
            "--at",
            "2025-09-01",
        ])
        .assert()
        .success();

    evt()
        .args(["--data-dir", &dir, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("add_session"));
}

#[test]
fn test_db_info_reports_counts() {
    let dir = setup_data_dir("db_info");

    evt()
        .args([
            "--data-dir",
            &dir,
            "--account",
            "alice",
            "--test",
            "add",
            "--start",
            "20",
            "--end",
            "80",
            "--cost",
            "500",
            "--at",
            "2025-09-01",
        ])
        .assert()
        .success();

    evt()
        .args(["--data-dir", &dir, "--test", "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Charging sessions"));

    evt()
        .args(["--data-dir", &dir, "--test", "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_log_print_without_database_is_friendly() {
    let dir = setup_data_dir("log_no_db");

    evt()
        .args(["--data-dir", &dir, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("No account database"));

    // Asking for the log must not create an empty database file.
    assert!(!Path::new(&dir).join("evtrack.sqlite").exists());
}

#[test]
fn test_db_info_without_database_is_friendly() {
    let dir = setup_data_dir("db_no_db");

    evt()
        .args(["--data-dir", &dir, "--test", "db", "--info"])
        .assert()
        .success()
        .stdout(contains("No account database"));

    assert!(!Path::new(&dir).join("evtrack.sqlite").exists());
}

#[test]
fn test_init_creates_config_and_db() {
    let dir = setup_data_dir("init_all");

    evt()
        .args(["--data-dir", &dir, "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(Path::new(&dir).join("evtrack.conf").exists());
    assert!(Path::new(&dir).join("evtrack.sqlite").exists());

    evt()
        .args(["--data-dir", &dir, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("database"));
}
