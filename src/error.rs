//! Custom error types for the cashflow scanner
//!
//! All user input is validated at the boundary (CLI parsing and the service
//! layer). The analytics engine itself never returns an error.

use thiserror::Error;

/// The main error type for cashflow scanner operations
#[derive(Error, Debug)]
pub enum CashflowError {
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

    /// Amount was non-numeric, zero, negative, or too precise
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount { input: String, reason: String },

    /// Date did not parse as YYYY-MM-DD
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors, including corrupt persisted records
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl CashflowError {
    /// Create an invalid amount error
    pub fn invalid_amount(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a "not found" error for income records
    pub fn income_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Income",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expense records
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error was caused by bad user input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidAmount { .. } | Self::InvalidDate(_)
        )
    }
}

impl From<std::io::Error> for CashflowError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CashflowError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for cashflow scanner operations
pub type CashflowResult<T> = Result<T, CashflowError>;
