//! HTTP error mapping shared by every route module.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::analysis::AnalysisError;
use crate::domain::dashboard::DashboardError;
use crate::domain::fighter::FighterError;
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::performance::PerformanceError;
use crate::domain::training::TrainingError;

// ════════════════════════════════════════════════════════════════════════════════
// Response body
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// API error that implements IntoResponse.
#[derive(Debug)]
pub enum ApiError {
    BadRequest { message: String, field: String },
    NotFound { code: ErrorCode, message: String },
    Internal(String),
}

impl ApiError {
    fn from_parts(code: ErrorCode, message: String, field: Option<String>) -> Self {
        match code {
            ErrorCode::ValidationFailed => ApiError::BadRequest {
                message,
                field: field.unwrap_or_else(|| "unknown".to_string()),
            },
            ErrorCode::FighterNotFound
            | ErrorCode::AnalysisNotFound
            | ErrorCode::TrainingSessionNotFound => ApiError::NotFound { code, message },
            _ => ApiError::Internal(message),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::BadRequest { message, field } => {
                ErrorResponse::new(ErrorCode::ValidationFailed, message)
                    .with_details(json!({ "field": field }))
            }
            ApiError::NotFound { code, message } => ErrorResponse::new(code, message),
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "Request failed");
                ErrorResponse::new(ErrorCode::InternalError, "An internal error occurred")
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<FighterError> for ApiError {
    fn from(err: FighterError) -> Self {
        let field = match &err {
            FighterError::ValidationFailed { field, .. } => Some(field.clone()),
            _ => None,
        };
        ApiError::from_parts(err.code(), err.to_string(), field)
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        let field = match &err {
            AnalysisError::ValidationFailed { field, .. } => Some(field.clone()),
            _ => None,
        };
        ApiError::from_parts(err.code(), err.to_string(), field)
    }
}

impl From<TrainingError> for ApiError {
    fn from(err: TrainingError) -> Self {
        let field = match &err {
            TrainingError::ValidationFailed { field, .. } => Some(field.clone()),
            _ => None,
        };
        ApiError::from_parts(err.code(), err.to_string(), field)
    }
}

impl From<PerformanceError> for ApiError {
    fn from(err: PerformanceError) -> Self {
        let field = match &err {
            PerformanceError::ValidationFailed { field, .. } => Some(field.clone()),
            _ => None,
        };
        ApiError::from_parts(err.code(), err.to_string(), field)
    }
}

impl From<DashboardError> for ApiError {
    fn from(err: DashboardError) -> Self {
        ApiError::from_parts(err.code(), err.to_string(), None)
    }
}
