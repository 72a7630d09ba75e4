//! HTTP routes for training session endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{list_sessions, schedule_session, update_session};
use crate::adapters::http::state::AppState;

pub fn training_routes() -> Router<AppState> {
    Router::new()
        .route("/api/training", post(schedule_session))
        .route("/api/training/:id", put(update_session))
        .route("/api/fighters/:id/training", get(list_sessions))
}
