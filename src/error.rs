//! Custom error types for the expense splitter
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Split validation failures have their own
//! structured type in [`crate::split::ValidationError`] and are wrapped here
//! when they cross the service boundary.

use thiserror::Error;

use crate::split::ValidationError;

/// The main error type for expense splitter operations
#[derive(Error, Debug)]
pub enum SplitterError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for expense fields outside the split itself
    #[error("Validation error: {0}")]
    Validation(String),

    /// The share split was rejected
    #[error("Invalid split ({}): {0}", .0.kind())]
    Split(ValidationError),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SplitterError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for recurring expenses
    pub fn recurring_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Recurring expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error (field or split)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Split(_))
    }

    /// The underlying split error, if this is one
    pub fn as_split(&self) -> Option<&ValidationError> {
        match self {
            Self::Split(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for SplitterError {
    fn from(err: ValidationError) -> Self {
        Self::Split(err)
    }
}

impl From<std::io::Error> for SplitterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SplitterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for SplitterError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Export(format!("YAML serialization failed: {}", err))
    }
}

impl From<csv::Error> for SplitterError {
    fn from(err: csv::Error) -> Self {
        Self::Export(format!("CSV write failed: {}", err))
    }
}

/// Result type alias for expense splitter operations
pub type SplitterResult<T> = Result<T, SplitterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_error_display() {
        let err = SplitterError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = SplitterError::expense_not_found("exp-1234");
        assert_eq!(err.to_string(), "Expense not found: exp-1234");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_split_error_carries_kind() {
        let err: SplitterError = ValidationError::DuplicateParticipant {
            person: "Alice".into(),
        }
        .into();

        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Invalid split (duplicate_participant): Participant 'Alice' appears more than once in the split"
        );
        assert!(err.as_split().is_some());
    }

    #[test]
    fn test_unbalanced_split_message_includes_delta() {
        let err: SplitterError = ValidationError::UnbalancedSplit {
            total: Money::from_cents(5000),
            resolved: Money::from_cents(6000),
            delta: Money::from_cents(-1000),
        }
        .into();

        let message = err.to_string();
        assert!(message.contains("unbalanced_split"));
        assert!(message.contains("-$10.00"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SplitterError = io_err.into();
        assert!(matches!(err, SplitterError::Io(_)));
    }
}
