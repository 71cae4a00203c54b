#![allow(dead_code)]
use assert_cmd::{cargo_bin_cmd, Command};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn evt() -> Command {
    cargo_bin_cmd!("evtrack")
}

/// Create a unique, empty data directory inside the system temp dir.
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_evtrack", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create data dir");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path and ensure it does not exist yet.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Record a completed guest-mode session on a fixed date.
pub fn add_session(data_dir: &str, date: &str, cost: &str) {
    evt()
        .args([
            "--data-dir",
            data_dir,
            "--test",
            "add",
            "--start",
            "20",
            "--end",
            "80",
            "--cost",
            cost,
            "--kwh",
            "45",
            "--at",
            date,
        ])
        .assert()
        .success();
}
