//! Fighter module - the athlete entity and its competitive attributes.

mod errors;
mod fighter;
mod record;
mod style;

pub use errors::FighterError;
pub use fighter::{Fighter, FighterDraft, FighterPatch, MAX_AGE, MIN_AGE};
pub use record::FightRecord;
pub use style::FightingStyle;
