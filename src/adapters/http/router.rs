//! Top-level router assembly.

use axum::http::{HeaderName, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::analysis::analysis_routes;
use super::dashboard::dashboard_routes;
use super::fighter::fighter_routes;
use super::health::health_routes;
use super::performance::performance_routes;
use super::state::AppState;
use super::training::training_routes;
use crate::config::ServerConfig;

/// Builds the complete API router with middleware applied.
pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(fighter_routes())
        .merge(analysis_routes())
        .merge(training_routes())
        .merge(performance_routes())
        .merge(dashboard_routes())
        .with_state(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// CORS policy from the configured origin list.
///
/// No origins (or `*`) means any origin is accepted.
pub fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let configured = server.cors_origins_list();
    let allow_origin = if configured.is_empty() || configured.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = configured
            .iter()
            .filter_map(|o| HeaderValue::from_str(o).ok())
            .collect();
        if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
}
