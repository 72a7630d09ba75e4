//! Training-specific error types.

use thiserror::Error;

use crate::domain::foundation::{
    DomainError, ErrorCode, FighterId, TrainingSessionId, ValidationError,
};

/// Errors from training session operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrainingError {
    #[error("Fighter not found: {0}")]
    FighterNotFound(FighterId),

    #[error("Training session not found: {0}")]
    NotFound(TrainingSessionId),

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl TrainingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TrainingError::FighterNotFound(_) => ErrorCode::FighterNotFound,
            TrainingError::NotFound(_) => ErrorCode::TrainingSessionNotFound,
            TrainingError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            TrainingError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}

impl From<ValidationError> for TrainingError {
    fn from(err: ValidationError) -> Self {
        TrainingError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for TrainingError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => TrainingError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => TrainingError::Infrastructure(err.to_string()),
        }
    }
}
