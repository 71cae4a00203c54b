use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{evt, setup_data_dir};

fn add_expense(dir: &str, title: &str, amount: &str, date: &str, category: &str) {
    evt()
        .args([
            "--data-dir",
            dir,
            "--test",
            "add-expense",
            "--title",
            title,
            "--amount",
            amount,
            "--date",
            date,
            "--category",
            category,
        ])
        .assert()
        .success();
}

#[test]
fn test_add_then_list_expenses() {
    let dir = setup_data_dir("expense_list");

    add_expense(&dir, "Inspection", "12000", "2025-09-01", "maintenance");
    add_expense(&dir, "Insurance", "40000", "2025-09-10", "insurance");

    evt()
        .args(["--data-dir", &dir, "--test", "expenses"])
        .assert()
        .success()
        .stdout(contains("Inspection"))
        .stdout(contains("Insurance"))
        .stdout(contains("Maintenance"))
        .stdout(contains("¥12000"));
}

#[test]
fn test_expense_rejects_unknown_category() {
    let dir = setup_data_dir("expense_bad_cat");

    evt()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "add-expense",
            "--title",
            "Wash",
            "--amount",
            "500",
            "--category",
            "cosmetic",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid expense category"));
}

#[test]
fn test_expense_rejects_negative_amount() {
    let dir = setup_data_dir("expense_neg");

    evt()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "add-expense",
            "--title",
            "Refund",
            "--amount",
            "-100",
        ])
        .assert()
        .failure()
        .stderr(contains("negative"));
}

#[test]
fn test_expense_period_filter() {
    let dir = setup_data_dir("expense_period");

    add_expense(&dir, "August tires", "30000", "2025-08-20", "maintenance");
    add_expense(&dir, "September tax", "5000", "2025-09-05", "tax");

    evt()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "expenses",
            "--period",
            "2025-09",
        ])
        .assert()
        .success()
        .stdout(contains("September tax"))
        .stdout(contains("August tires").not());
}

#[test]
fn test_del_expense_removes_exactly_one() {
    let dir = setup_data_dir("expense_del");

    add_expense(&dir, "Inspection", "12000", "2025-09-01", "maintenance");
    add_expense(&dir, "Insurance", "40000", "2025-09-10", "insurance");

    let out = evt()
        .args(["--data-dir", &dir, "--test", "expenses"])
        .output()
        .expect("run expenses");
    let stdout = String::from_utf8_lossy(&out.stdout);
    let line = stdout
        .lines()
        .find(|l| l.contains("Inspection"))
        .expect("listed expense");
    let id_prefix = line.split_whitespace().next().expect("id column");

    evt()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "del-expense",
            id_prefix,
            "--yes",
        ])
        .assert()
        .success()
        .stdout(contains("deleted"));

    evt()
        .args(["--data-dir", &dir, "--test", "expenses"])
        .assert()
        .success()
        .stdout(contains("Insurance"))
        .stdout(contains("Inspection").not());
}
