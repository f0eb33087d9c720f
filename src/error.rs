//! Custom error types for Billetera
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every variant is recoverable: callers turn
//! it into a [`Notice`](crate::services::Notice) rather than aborting.

use thiserror::Error;

/// The main error type for Billetera operations
#[derive(Error, Debug)]
pub enum BilleteraError {
    /// Bad user input (empty name, malformed period, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Amount was not numeric or not greater than zero
    #[error("Invalid amount: '{0}' must be a number greater than 0")]
    InvalidAmount(String),

    /// Amount was numeric and positive but too large or too precise to store
    #[error("Invalid amount: {0}")]
    AmountOutOfRange(String),

    /// The persistence medium could not be read or written
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// The biometric check ran and did not succeed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The device supports biometrics but none are enrolled
    #[error("No biometrics enrolled on this device")]
    NotEnrolled,

    /// The gate has not resolved yet
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl BilleteraError {
    /// Create a "not found" error for expenses
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

    /// Check if this is a validation error (including amount validation)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidAmount(_) | Self::AmountOutOfRange(_)
        )
    }

    /// Check if this is a storage failure
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::StorageUnavailable(_))
    }
}

impl From<std::io::Error> for BilleteraError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BilleteraError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Billetera operations
pub type BilleteraResult<T> = Result<T, BilleteraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BilleteraError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = BilleteraError::expense_not_found("exp-1234");
        assert_eq!(err.to_string(), "Expense not found: exp-1234");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_amount_is_validation() {
        let err = BilleteraError::InvalidAmount("abc".into());
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Invalid amount: 'abc' must be a number greater than 0"
        );
    }

    #[test]
    fn test_amount_out_of_range_is_validation() {
        let err =
            BilleteraError::AmountOutOfRange("amount must not exceed 1000000000000: 5e21".into());
        assert!(err.is_validation());
        assert!(err.to_string().starts_with("Invalid amount: "));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BilleteraError = io_err.into();
        assert!(matches!(err, BilleteraError::Io(_)));
    }
}
