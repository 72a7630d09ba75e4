//! Performance-history error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, FighterId, ValidationError};

/// Errors from performance history operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PerformanceError {
    #[error("Fighter not found: {0}")]
    FighterNotFound(FighterId),

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl PerformanceError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PerformanceError::FighterNotFound(_) => ErrorCode::FighterNotFound,
            PerformanceError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PerformanceError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}

impl From<ValidationError> for PerformanceError {
    fn from(err: ValidationError) -> Self {
        PerformanceError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for PerformanceError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => PerformanceError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => PerformanceError::Infrastructure(err.to_string()),
        }
    }
}
