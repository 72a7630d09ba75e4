//! HTTP routes for performance history endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{list_performance, performance_trend, record_performance};
use crate::adapters::http::state::AppState;

pub fn performance_routes() -> Router<AppState> {
    Router::new()
        .route("/api/performance", post(record_performance))
        .route("/api/fighters/:id/performance", get(list_performance))
        .route("/api/fighters/:id/performance/trend", get(performance_trend))
}
