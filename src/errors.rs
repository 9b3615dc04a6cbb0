//! Unified application error type.
//! Every module (store, core, cli) returns AppError so that the
//! swallow-or-propagate decision is taken in one place per operation.

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
    // Storage
    // ---------------------------
    #[error("Failed to read key '{key}': {reason}")]
    StorageRead { key: String, reason: String },

    #[error("Failed to write key '{key}': {reason}")]
    StorageWrite { key: String, reason: String },

    #[error("Malformed JSON stored under '{key}': {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Session / registration
    // ---------------------------
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("User '{0}' already exists")]
    UserExists(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown screen: {0}")]
    InvalidScreen(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    pub fn read(key: &str, reason: impl ToString) -> Self {
        AppError::StorageRead {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn write(key: &str, reason: impl ToString) -> Self {
        AppError::StorageWrite {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
