//! HTTP routes for dashboard endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::get_dashboard_stats;
use crate::adapters::http::state::AppState;

pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/api/dashboard/stats", get(get_dashboard_stats))
}
