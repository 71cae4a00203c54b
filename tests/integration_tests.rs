use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_session, evt, setup_data_dir};

#[test]
fn test_add_then_list_shows_session() {
    let dir = setup_data_dir("add_list");

    add_session(&dir, "2025-09-01", "500");

    evt()
        .args(["--data-dir", &dir, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("¥500"));
}

#[test]
fn test_add_rejects_percent_out_of_range() {
    let dir = setup_data_dir("bad_percent");

    evt()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "add",
            "--start",
            "120",
        ])
        .assert()
        .failure()
        .stderr(contains("out of range"));
}

#[test]
fn test_add_rejects_unknown_charge_type() {
    let dir = setup_data_dir("bad_type");

    evt()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "add",
            "--start",
            "20",
            "--type",
            "turbo",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid charge type"));
}

#[test]
fn test_start_finish_flow() {
    let dir = setup_data_dir("start_finish");

    evt()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "start",
            "--percent",
            "25",
        ])
        .assert()
        .success()
        .stdout(contains("Charging started at 25%"));

    // A second start must refuse.
    evt()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "start",
            "--percent",
            "30",
        ])
        .assert()
        .failure()
        .stderr(contains("already active"));

    evt()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "finish",
            "--end",
            "90",
            "--cost",
            "800",
        ])
        .assert()
        .success()
        .stdout(contains("completed"));

    // Nothing active anymore.
    evt()
        .args(["--data-dir", &dir, "--test", "finish", "--end", "95"])
        .assert()
        .failure()
        .stderr(contains("No active charging session"));
}

#[test]
fn test_del_declined_prompt_keeps_record() {
    let dir = setup_data_dir("del_confirm");

    add_session(&dir, "2025-09-01", "500");

    let out = evt()
        .args(["--data-dir", &dir, "--test", "list"])
        .output()
        .expect("run list");
    let stdout = String::from_utf8_lossy(&out.stdout);
    let line = stdout
        .lines()
        .find(|l| l.contains("2025-09-01"))
        .expect("listed session");
    let id_prefix = line.split_whitespace().next().expect("id column");

    evt()
        .args(["--data-dir", &dir, "--test", "del", id_prefix])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("cancelled"));

    evt()
        .args(["--data-dir", &dir, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"));
}

#[test]
fn test_del_by_prefix_removes_exactly_that_session() {
    let dir = setup_data_dir("del_prefix");

    add_session(&dir, "2025-09-01", "500");
    add_session(&dir, "2025-09-15", "700");

    // Grab an id prefix from the list output.
    let out = evt()
        .args(["--data-dir", &dir, "--test", "list"])
        .output()
        .expect("run list");
    let stdout = String::from_utf8_lossy(&out.stdout);
    let first_line = stdout
        .lines()
        .find(|l| l.contains("2025-09-15"))
        .expect("listed session");
    let id_prefix = first_line.split_whitespace().next().expect("id column");

    evt()
        .args(["--data-dir", &dir, "--test", "del", id_prefix, "--yes"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    evt()
        .args(["--data-dir", &dir, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-15").not());
}

#[test]
fn test_del_unknown_id_fails() {
    let dir = setup_data_dir("del_unknown");

    evt()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "del",
            "ffffffff",
            "--yes",
        ])
        .assert()
        .failure()
        .stderr(contains("No record found"));
}

#[test]
fn test_list_period_filter() {
    let dir = setup_data_dir("list_period");

    add_session(&dir, "2025-08-31", "300");
    add_session(&dir, "2025-09-15", "500");
    add_session(&dir, "2024-09-10", "900");

    evt()
        .args(["--data-dir", &dir, "--test", "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("2025-09-15"))
        .stdout(contains("2025-08-31").not())
        .stdout(contains("2024-09-10").not());

    evt()
        .args(["--data-dir", &dir, "--test", "list", "--period", "2024"])
        .assert()
        .success()
        .stdout(contains("2024-09-10"))
        .stdout(contains("2025-09-15").not());
}

#[test]
fn test_list_rejects_malformed_multibyte_period() {
    let dir = setup_data_dir("list_bad_period");

    add_session(&dir, "2025-09-01", "500");

    // 7 bytes of non-ASCII input must produce an error, not a crash.
    evt()
        .args(["--data-dir", &dir, "--test", "list", "--period", "202é-6"])
        .assert()
        .failure()
        .stderr(contains("invalid month"));
}

#[test]
fn test_edit_updates_cost() {
    let dir = setup_data_dir("edit_cost");

    add_session(&dir, "2025-09-01", "500");

    let out = evt()
        .args(["--data-dir", &dir, "--test", "list"])
        .output()
        .expect("run list");
    let stdout = String::from_utf8_lossy(&out.stdout);
    let line = stdout
        .lines()
        .find(|l| l.contains("2025-09-01"))
        .expect("listed session");
    let id_prefix = line.split_whitespace().next().expect("id column");

    evt()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "edit",
            id_prefix,
            "--cost",
            "650",
        ])
        .assert()
        .success()
        .stdout(contains("updated"));

    evt()
        .args(["--data-dir", &dir, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("¥650"));
}
