//! src/error.rs
//! ============================================================================
//! # AppError: Unified Error Type for the Model Catalog Viewer
//!
//! This module defines the error enum (`AppError`) used across the entire
//! application. Fatal configuration failures abort startup; store and
//! clipboard failures are surfaced on the status line and leave prior state
//! intact.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Unified error type for all viewer operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No configuration document was found at the expected location.
    #[error("Configuration not found at {0:?}")]
    ConfigMissing(PathBuf),

    /// Configuration exists but a required setting is absent or unusable.
    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Backing database file missing at the configured location.
    #[error("Model store not found at {0:?}")]
    StoreUnavailable(PathBuf),

    /// Query execution or row decoding failure against the backing store.
    #[error("Model store query failed: {0}")]
    StoreCorrupt(String),

    /// Clipboard write failure, non-fatal.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] clipout::ClipError),

    /// Terminal I/O or rendering error.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Any other error, with description.
    #[error("Unexpected error: {0}")]
    Other(String),
}

impl AppError {
    /// True when the error only warrants a status-line message rather than
    /// terminating the process.
    pub fn is_status_only(&self) -> bool {
        matches!(
            self,
            AppError::StoreUnavailable(_) | AppError::StoreCorrupt(_) | AppError::Clipboard(_)
        )
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::StoreCorrupt(e.to_string())
    }
}

// Allow conversion from `anyhow::Error` as fallback.
impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError::Other(e.to_string())
    }
}
