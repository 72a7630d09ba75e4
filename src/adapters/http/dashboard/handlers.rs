//! HTTP handlers for dashboard endpoints.

use axum::extract::State;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;

use super::dto::DashboardStatsResponse;

/// GET /api/dashboard/stats
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
) -> Result<Json<DashboardStatsResponse>, ApiError> {
    Ok(Json(state.dashboard_stats_handler().handle().await?))
}
