//! Strongly-typed identifier value objects.
//!
//! Identifiers are opaque strings. Stored seed records use short ids such
//! as `"1"` or `"a1"`, newly created records get a random UUID.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Generates an opaque string identifier type.
///
/// Each generated type gets:
/// - `generate()` producing a random UUID-backed id
/// - `new()` validating a caller-provided id (non-empty)
/// - `as_str()`, `Display`, `FromStr` and transparent serde
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new random identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Creates an identifier from an existing string, rejecting empty input.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(id))
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

string_id!(
    /// Unique identifier for a fighter.
    FighterId,
    "fighter_id"
);

string_id!(
    /// Unique identifier for a generated or recorded analysis.
    AnalysisId,
    "analysis_id"
);

string_id!(
    /// Unique identifier for a scheduled training session.
    TrainingSessionId,
    "training_session_id"
);

string_id!(
    /// Unique identifier for a per-fight performance record.
    PerformanceRecordId,
    "performance_record_id"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let id1 = FighterId::generate();
        let id2 = FighterId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn generated_id_is_a_uuid() {
        let id = AnalysisId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn fighter_id_accepts_short_seed_ids() {
        let id = FighterId::new("1").unwrap();
        assert_eq!(id.as_str(), "1");
    }

    #[test]
    fn fighter_id_rejects_empty_string() {
        let result = FighterId::new("  ");
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "fighter_id"),
            _ => panic!("Expected EmptyField error"),
        }
    }

    #[test]
    fn id_parses_from_str() {
        let id: TrainingSessionId = "t1".parse().unwrap();
        assert_eq!(id.to_string(), "t1");
    }

    #[test]
    fn id_serializes_transparently() {
        let id = PerformanceRecordId::new("p1").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"p1\"");

        let back: PerformanceRecordId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
