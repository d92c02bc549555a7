//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must contain exactly {expected} values, got {actual}")]
    WrongLength {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates a wrong length validation error.
    pub fn wrong_length(field: impl Into<String>, expected: usize, actual: usize) -> Self {
        ValidationError::WrongLength {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes surfaced to API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Not found errors
    GameNotFound,

    // State errors
    InvalidPhase,
    SecretCodeNotSet,
    NoHintAvailable,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::GameNotFound => "NOT_FOUND",
            ErrorCode::InvalidPhase => "INVALID_PHASE",
            ErrorCode::SecretCodeNotSet => "SECRET_CODE_NOT_SET",
            ErrorCode::NoHintAvailable => "NO_HINT_AVAILABLE",
        };
        write!(f, "{}", s)
    }
}
