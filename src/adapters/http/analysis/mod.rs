//! Analysis HTTP adapter module.
//!
//! Scoring, manual analyses, predictions and training plans.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::analysis_routes;
