//! HTTP adapters - REST API implementations.
//!
//! Each domain area has its own HTTP adapter for endpoint exposure. The
//! [`build_router`] function merges them behind one shared [`AppState`].

pub mod analysis;
pub mod dashboard;
pub mod error;
pub mod fighter;
pub mod health;
pub mod performance;
pub mod router;
pub mod state;
pub mod training;

// Re-export key types for convenience
pub use error::{ApiError, ErrorResponse};
pub use router::build_router;
pub use state::AppState;
