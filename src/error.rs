//! Custom error types for the habit tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for habit tracker operations
#[derive(Error, Debug)]
pub enum HabitError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A form field held something other than a non-negative number
    #[error("Please enter a valid non-negative number for '{field}'.")]
    InvalidField { field: &'static str, value: String },

    /// A date that does not exist on the calendar
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl HabitError {
    /// Create an invalid field error for the given field label
    pub fn invalid_field(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            value: value.into(),
        }
    }
}

impl From<std::io::Error> for HabitError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HabitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for HabitError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for habit tracker operations
pub type HabitResult<T> = Result<T, HabitError>;
