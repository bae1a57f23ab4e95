//! Unified application error type.
//! All modules (db, storage, reminder, core, cli) return AppError to keep the
//! error handling consistent and easy to manage.

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

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // History storage
    // ---------------------------
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Stored punch history is malformed: {0}")]
    CorruptHistory(String),

    // ---------------------------
    // Reminders
    // ---------------------------
    #[error("Failed to schedule reminder: {0}")]
    Notification(String),

    #[error("Reminder not found: {0}")]
    InvalidReminder(i64),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid session type: {0}")]
    InvalidSessionType(String),

    #[error("Invalid half: {0}")]
    InvalidSubVariant(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
