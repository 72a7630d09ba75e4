//! HTTP DTOs for fighter endpoints.
//!
//! The domain types already serialize in the wire shape, so requests and
//! responses re-export them directly.

pub use crate::domain::fighter::{
    Fighter as FighterResponse, FighterDraft as CreateFighterRequest,
    FighterPatch as UpdateFighterRequest,
};
