use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_session, evt, setup_data_dir};

#[test]
fn test_profile_set_and_print() {
    let dir = setup_data_dir("profile_set");

    evt()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "profile",
            "--capacity",
            "75",
            "--rate",
            "30",
            "--currency",
            "eur",
        ])
        .assert()
        .success()
        .stdout(contains("Profile updated"));

    evt()
        .args(["--data-dir", &dir, "--test", "profile", "--print"])
        .assert()
        .success()
        .stdout(contains("75.0 kWh"))
        .stdout(contains("EUR"));
}

#[test]
fn test_profile_ev_catalogue_fills_capacity() {
    let dir = setup_data_dir("profile_ev");

    evt()
        .args(["--data-dir", &dir, "--test", "profile", "--list-evs"])
        .assert()
        .success()
        .stdout(contains("tesla-m3-lr"))
        .stdout(contains("Ioniq 5"));

    evt()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "profile",
            "--ev",
            "tesla-m3-lr",
            "--print",
        ])
        .assert()
        .success()
        .stdout(contains("75.0 kWh"));

    evt()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "profile",
            "--ev",
            "no-such-model",
        ])
        .assert()
        .failure()
        .stderr(contains("No record found"));
}

#[test]
fn test_home_flag_uses_profile_rate() {
    let dir = setup_data_dir("home_cost");

    evt()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "profile",
            "--capacity",
            "75",
            "--rate",
            "30",
        ])
        .assert()
        .success();

    // 20% -> 80% of 75 kWh at 30/kWh = 1350.
    evt()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "add",
            "--start",
            "20",
            "--end",
            "80",
            "--home",
            "--at",
            "2025-09-01",
        ])
        .assert()
        .success();

    evt()
        .args(["--data-dir", &dir, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("¥1350"));
}

#[test]
fn test_stats_aggregates_monthly_costs() {
    let dir = setup_data_dir("stats_monthly");

    add_session(&dir, "2025-09-01", "500");
    add_session(&dir, "2025-09-20", "700");
    add_session(&dir, "2025-10-02", "100");

    evt()
        .args(["--data-dir", &dir, "--test", "stats"])
        .assert()
        .success()
        .stdout(contains("Sep 2025"))
        .stdout(contains("¥1200"))
        .stdout(contains("Oct 2025"))
        .stdout(contains("¥100"))
        .stdout(contains("Sessions:       3"));
}

#[test]
fn test_stats_period_filters_totals() {
    let dir = setup_data_dir("stats_period");

    add_session(&dir, "2025-09-01", "500");
    add_session(&dir, "2025-09-20", "700");
    add_session(&dir, "2025-10-02", "100");

    evt()
        .args(["--data-dir", &dir, "--test", "stats", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("¥1200"))
        .stdout(contains("Sessions:       2"))
        .stdout(contains("Oct 2025").not());

    evt()
        .args(["--data-dir", &dir, "--test", "stats", "--period", "2024"])
        .assert()
        .success()
        .stdout(contains("No data found for selected period"));
}

#[test]
fn test_roi_reports_estimate_from_kwh() {
    let dir = setup_data_dir("roi_kwh");

    // Two sessions, 45 kWh each, 1500 total cost.
    add_session(&dir, "2025-09-01", "750");
    add_session(&dir, "2025-09-15", "750");

    evt()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "roi",
            "--gas-price",
            "150",
            "--gas-mileage",
            "30",
            "--ev-mileage",
            "4",
            "--distance",
            "12000",
        ])
        .assert()
        .success()
        .stdout(contains("Yearly cost estimate"))
        .stdout(contains("¥60000"));
}

#[test]
fn test_roi_without_data_says_so() {
    let dir = setup_data_dir("roi_empty");

    evt()
        .args([
            "--data-dir",
            &dir,
            "--test",
            "roi",
            "--gas-price",
            "150",
            "--gas-mileage",
            "30",
            "--ev-mileage",
            "4",
            "--distance",
            "12000",
        ])
        .assert()
        .success()
        .stdout(contains("Not enough data"));
}
