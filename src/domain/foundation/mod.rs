//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, error types and the base repository
//! trait that form the vocabulary of the fighter insights domain.

mod errors;
mod ids;
mod repository;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AnalysisId, FighterId, PerformanceRecordId, TrainingSessionId};
pub use repository::Repository;
pub use timestamp::Timestamp;
