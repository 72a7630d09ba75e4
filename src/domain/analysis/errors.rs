//! Analysis-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, FighterId, ValidationError};

/// Errors from analysis, prediction and training plan operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Fighter not found: {0}")]
    FighterNotFound(FighterId),

    /// The fighter exists but has never been analyzed.
    #[error("No analysis found for fighter {0}")]
    NoAnalysis(FighterId),

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl AnalysisError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::FighterNotFound(_) => ErrorCode::FighterNotFound,
            AnalysisError::NoAnalysis(_) => ErrorCode::AnalysisNotFound,
            AnalysisError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AnalysisError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}

impl From<ValidationError> for AnalysisError {
    fn from(err: ValidationError) -> Self {
        AnalysisError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for AnalysisError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => AnalysisError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => AnalysisError::Infrastructure(err.to_string()),
        }
    }
}
