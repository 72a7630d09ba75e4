//! Dashboard error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors from dashboard queries. Aggregation itself cannot fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl DashboardError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DashboardError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}

impl From<DomainError> for DashboardError {
    fn from(err: DomainError) -> Self {
        DashboardError::Infrastructure(err.to_string())
    }
}
