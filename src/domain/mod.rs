//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, repository trait)
//! - `fighter` - Fighter entity, fight record and style classification
//! - `analysis` - Skill scoring, insight generation, training plans, predictions
//! - `training` - Scheduled training sessions
//! - `performance` - Per-fight performance history and trends
//! - `dashboard` - Headline statistics aggregated across fighters

pub mod analysis;
pub mod dashboard;
pub mod fighter;
pub mod foundation;
pub mod performance;
pub mod training;
