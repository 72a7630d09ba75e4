//! HTTP routes for analysis endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    analyze_fighter, latest_analysis, list_analyses, predict_performance, record_analysis,
    training_plan,
};
use crate::adapters::http::state::AppState;

pub fn analysis_routes() -> Router<AppState> {
    Router::new()
        .route("/api/analyses", post(record_analysis))
        .route("/api/fighters/:id/analyses", get(list_analyses))
        .route("/api/fighters/:id/analysis/latest", get(latest_analysis))
        .route("/api/fighters/:id/analyze", post(analyze_fighter))
        .route("/api/fighters/:id/prediction", get(predict_performance))
        .route("/api/fighters/:id/training/plan", get(training_plan))
}
