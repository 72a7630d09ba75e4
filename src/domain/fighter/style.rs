//! Fighting style classification.

use serde::{Deserialize, Serialize};

/// Known fighting styles that drive scoring adjustments.
///
/// The fighter record stores the style as free text; this enum is the
/// interpretation of that tag. Unknown tags map to `Unclassified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FightingStyle {
    Striker,
    Grappler,
    Wrestler,
    Mixed,
    Unclassified,
}

impl FightingStyle {
    /// Classifies a free-text style tag, ignoring case and surrounding whitespace.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "striker" => FightingStyle::Striker,
            "grappler" => FightingStyle::Grappler,
            "wrestler" => FightingStyle::Wrestler,
            "mixed" => FightingStyle::Mixed,
            _ => FightingStyle::Unclassified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(FightingStyle::from_tag("Striker"), FightingStyle::Striker);
        assert_eq!(FightingStyle::from_tag("GRAPPLER"), FightingStyle::Grappler);
        assert_eq!(FightingStyle::from_tag(" wrestler "), FightingStyle::Wrestler);
        assert_eq!(FightingStyle::from_tag("Mixed"), FightingStyle::Mixed);
    }

    #[test]
    fn unknown_tags_are_unclassified() {
        assert_eq!(FightingStyle::from_tag("Muay Thai"), FightingStyle::Unclassified);
        assert_eq!(FightingStyle::from_tag(""), FightingStyle::Unclassified);
    }
}
