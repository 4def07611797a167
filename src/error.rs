//! Error types for the payroll ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the store, calculator and report builder can report.

use thiserror::Error;

/// The main error type for the payroll ledger.
///
/// Every fallible operation in the crate returns this error type, so callers
/// (the HTTP layer included) can map failures in one place.
///
/// # Example
///
/// ```
/// use payroll_ledger::error::PayrollError;
///
/// let error = PayrollError::EmployeeNotFound { id: 42 };
/// assert_eq!(error.to_string(), "Employee not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or holds an invalid value.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A required input was missing, blank or out of range.
    #[error("Invalid field '{field}': {message}")]
    Validation {
        /// The field that was invalid.
        field: String,
        /// A human-readable reason.
        message: String,
    },

    /// No employee exists with the given identifier.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        id: i64,
    },

    /// The underlying SQLite database reported an error.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A report file could not be written.
    #[error("Failed to export report '{path}': {message}")]
    Export {
        /// The file or directory being written.
        path: String,
        /// A description of the failure.
        message: String,
    },
}

impl PayrollError {
    /// Builds a [`PayrollError::Validation`] for `field`.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
