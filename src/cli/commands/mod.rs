pub mod add;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod expense;
pub mod export;
pub mod finish;
pub mod init;
pub mod list;
pub mod log;
pub mod profile;
pub mod roi;
pub mod start;
pub mod stats;

use crate::errors::{AppError, AppResult};
use crate::models::charge_type::ChargeType;
use crate::ui::messages::warning;
use crate::utils::date::parse_datetime;
use chrono::{DateTime, Local};
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Resolve an optional `--type` value.
pub(crate) fn parse_charge_type(code: Option<&str>) -> AppResult<Option<ChargeType>> {
    match code {
        None => Ok(None),
        Some(c) => ChargeType::from_code(c)
            .map(Some)
            .ok_or_else(|| AppError::InvalidChargeType(c.to_string())),
    }
}

/// Resolve an optional `--at` timestamp; absent means now.
pub(crate) fn parse_at(s: Option<&str>) -> AppResult<DateTime<Local>> {
    match s {
        None => Ok(Local::now()),
        Some(raw) => parse_datetime(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string())),
    }
}
