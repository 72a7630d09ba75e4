//! Training module - scheduled training sessions.

mod errors;
mod session;

pub use errors::TrainingError;
pub use session::{
    TrainingSession, TrainingSessionDraft, TrainingSessionPatch, MAX_SESSION_MINUTES,
};
