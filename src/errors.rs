//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use chrono::NaiveDate;
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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid month format: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Invalid range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Employee {0} not found")]
    EmployeeNotFound(i64),

    #[error("No employee with email '{0}'")]
    EmployeeEmailNotFound(String),

    #[error("Email '{0}' is already registered")]
    DuplicateEmail(String),

    #[error("{0} is not a manager")]
    NotAManager(String),

    #[error("Invalid employee: {0}")]
    InvalidEmployee(String),

    #[error("Justification {0} not found")]
    JustificationNotFound(i64),

    #[error("No holiday registered on {0}")]
    HolidayNotFound(NaiveDate),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// A stored row whose values could not be decoded into the model.
    pub fn is_unreadable_row(&self) -> bool {
        matches!(self, AppError::Db(rusqlite::Error::FromSqlConversionFailure(..)))
    }
}
