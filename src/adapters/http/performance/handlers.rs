//! HTTP handlers for performance history endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::performance::{
    GetPerformanceTrendQuery, ListPerformanceQuery, RecordPerformanceCommand,
};
use crate::domain::foundation::FighterId;

use super::dto::{PerformanceResponse, RecordPerformanceRequest, TrendResponse};

/// GET /api/fighters/:id/performance
pub async fn list_performance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<PerformanceResponse>>, ApiError> {
    let query = ListPerformanceQuery {
        fighter_id: FighterId::new(id)?,
    };
    Ok(Json(state.list_performance_handler().handle(query).await?))
}

/// GET /api/fighters/:id/performance/trend
pub async fn performance_trend(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TrendResponse>, ApiError> {
    let query = GetPerformanceTrendQuery {
        fighter_id: FighterId::new(id)?,
    };
    Ok(Json(state.performance_trend_handler().handle(query).await?))
}

/// POST /api/performance
pub async fn record_performance(
    State(state): State<AppState>,
    Json(req): Json<RecordPerformanceRequest>,
) -> Result<(StatusCode, Json<PerformanceResponse>), ApiError> {
    let record = state
        .record_performance_handler()
        .handle(RecordPerformanceCommand { draft: req })
        .await?;
    Ok((StatusCode::CREATED, Json(record)))
}
