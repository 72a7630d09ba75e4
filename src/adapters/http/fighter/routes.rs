//! HTTP routes for fighter endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{create_fighter, delete_fighter, get_fighter, list_fighters, update_fighter};
use crate::adapters::http::state::AppState;

/// Creates the fighter router. State is supplied by the caller.
pub fn fighter_routes() -> Router<AppState> {
    Router::new()
        .route("/api/fighters", get(list_fighters).post(create_fighter))
        .route(
            "/api/fighters/:id",
            get(get_fighter).put(update_fighter).delete(delete_fighter),
        )
}
