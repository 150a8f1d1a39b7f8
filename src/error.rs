//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::services::parser::ParseError;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for records
    #[error("Validation error: {0}")]
    Validation(String),

    /// A chat message could not be turned into a transaction
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The ledger store failed to append or read
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Chart rendering errors
    #[error("Render error: {0}")]
    Render(String),
}

impl TrackerError {
    /// Create a store error for a named sheet
    pub fn store(sheet: &str, detail: impl std::fmt::Display) -> Self {
        Self::StoreUnavailable(format!("sheet '{}': {}", sheet, detail))
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Check if this is a store failure
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
