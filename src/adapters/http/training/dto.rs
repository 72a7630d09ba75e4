//! HTTP DTOs for training session endpoints.

pub use crate::domain::training::{
    TrainingSession as TrainingSessionResponse, TrainingSessionDraft as ScheduleSessionRequest,
    TrainingSessionPatch as UpdateSessionRequest,
};
