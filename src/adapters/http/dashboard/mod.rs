//! Dashboard HTTP adapter module.
//!
//! Provides REST API endpoints for dashboard queries.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::dashboard_routes;
