//! Unified application error type.
//! All modules (store, db, core, cli, export) return AppError to keep the
//! error handling consistent across both persistence backends.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Local store error: {0}")]
    LocalStore(String),

    #[error("No record found with id {0}")]
    NotFound(String),

    #[error("A charging session is already active (started {0})")]
    SessionAlreadyActive(String),

    #[error("No active charging session")]
    NoActiveSession,

    // ---------------------------
    // Validation / parsing
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Battery percentage out of range (0-100): {0}")]
    InvalidPercent(i32),

    #[error("Invalid charge type: {0}")]
    InvalidChargeType(String),

    #[error("Invalid expense category: {0}")]
    InvalidCategory(String),

    #[error("Validation error: {0}")]
    Validation(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::LocalStore(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
