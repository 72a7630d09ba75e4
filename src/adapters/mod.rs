//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `http` - axum REST API
//! - `memory` - in-memory repositories and demo seed data
//! - `random` - random sources for the scoring heuristic

pub mod http;
pub mod memory;
pub mod random;
