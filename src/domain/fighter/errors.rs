//! Fighter-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, FighterId, ValidationError};

/// Errors from fighter operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FighterError {
    #[error("Fighter not found: {0}")]
    NotFound(FighterId),

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl FighterError {
    pub fn not_found(id: FighterId) -> Self {
        FighterError::NotFound(id)
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            FighterError::NotFound(_) => ErrorCode::FighterNotFound,
            FighterError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            FighterError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}

impl From<ValidationError> for FighterError {
    fn from(err: ValidationError) -> Self {
        FighterError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for FighterError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => FighterError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => FighterError::Infrastructure(err.to_string()),
        }
    }
}
