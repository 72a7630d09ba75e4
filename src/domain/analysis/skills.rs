//! Skill dimensions and the six-score profile.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// One of the six scored aspects of a fighter's game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillDimension {
    Striking,
    Grappling,
    Cardio,
    Defense,
    Aggression,
    Technique,
}

impl SkillDimension {
    /// All dimensions in canonical iteration order.
    pub const ALL: [SkillDimension; 6] = [
        SkillDimension::Striking,
        SkillDimension::Grappling,
        SkillDimension::Cardio,
        SkillDimension::Defense,
        SkillDimension::Aggression,
        SkillDimension::Technique,
    ];

    /// Lowercase name, as used in insight text and JSON keys.
    pub fn name(&self) -> &'static str {
        match self {
            SkillDimension::Striking => "striking",
            SkillDimension::Grappling => "grappling",
            SkillDimension::Cardio => "cardio",
            SkillDimension::Defense => "defense",
            SkillDimension::Aggression => "aggression",
            SkillDimension::Technique => "technique",
        }
    }

    /// Capitalized name for sentence starts.
    pub fn label(&self) -> &'static str {
        match self {
            SkillDimension::Striking => "Striking",
            SkillDimension::Grappling => "Grappling",
            SkillDimension::Cardio => "Cardio",
            SkillDimension::Defense => "Defense",
            SkillDimension::Aggression => "Aggression",
            SkillDimension::Technique => "Technique",
        }
    }
}

impl fmt::Display for SkillDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Six integer skill scores.
///
/// The overall score is never stored independently; [`SkillScores::overall`]
/// derives it so it cannot drift from its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillScores {
    pub striking: u8,
    pub grappling: u8,
    pub cardio: u8,
    pub defense: u8,
    pub aggression: u8,
    pub technique: u8,
}

impl SkillScores {
    /// Highest value any single score may take.
    pub const MAX: u8 = 100;

    /// Builds scores from values in canonical dimension order, rejecting
    /// anything above [`SkillScores::MAX`].
    pub fn try_from_values(values: [i64; 6]) -> Result<Self, ValidationError> {
        let mut checked = [0u8; 6];
        for (slot, (dimension, value)) in checked
            .iter_mut()
            .zip(SkillDimension::ALL.iter().zip(values))
        {
            if !(0..=i64::from(Self::MAX)).contains(&value) {
                return Err(ValidationError::out_of_range(
                    dimension.name(),
                    0,
                    i64::from(Self::MAX),
                    value,
                ));
            }
            *slot = value as u8;
        }
        Ok(Self::from_array(checked))
    }

    pub fn from_array(values: [u8; 6]) -> Self {
        let [striking, grappling, cardio, defense, aggression, technique] = values;
        Self {
            striking,
            grappling,
            cardio,
            defense,
            aggression,
            technique,
        }
    }

    pub fn get(&self, dimension: SkillDimension) -> u8 {
        match dimension {
            SkillDimension::Striking => self.striking,
            SkillDimension::Grappling => self.grappling,
            SkillDimension::Cardio => self.cardio,
            SkillDimension::Defense => self.defense,
            SkillDimension::Aggression => self.aggression,
            SkillDimension::Technique => self.technique,
        }
    }

    /// Iterates `(dimension, score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (SkillDimension, u8)> + '_ {
        SkillDimension::ALL.iter().map(move |d| (*d, self.get(*d)))
    }

    /// Rounded arithmetic mean of the six scores.
    pub fn overall(&self) -> u8 {
        let sum: u32 = self.iter().map(|(_, score)| u32::from(score)).sum();
        (f64::from(sum) / 6.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SkillScores {
        SkillScores::from_array([85, 67, 72, 78, 82, 79])
    }

    #[test]
    fn overall_is_rounded_mean() {
        // 463 / 6 = 77.17
        assert_eq!(sample().overall(), 77);
    }

    #[test]
    fn overall_rounds_half_up() {
        // 453 / 6 = 75.5
        let scores = SkillScores::from_array([75, 75, 75, 76, 76, 76]);
        assert_eq!(scores.overall(), 76);
    }

    #[test]
    fn iter_follows_canonical_order() {
        let dims: Vec<_> = sample().iter().map(|(d, _)| d).collect();
        assert_eq!(dims, SkillDimension::ALL.to_vec());
    }

    #[test]
    fn get_returns_matching_field() {
        let scores = sample();
        assert_eq!(scores.get(SkillDimension::Aggression), 82);
        assert_eq!(scores.get(SkillDimension::Grappling), 67);
    }

    #[test]
    fn try_from_values_rejects_out_of_range() {
        let err = SkillScores::try_from_values([80, 80, 101, 80, 80, 80]).unwrap_err();
        assert_eq!(err.field(), "cardio");

        assert!(SkillScores::try_from_values([80, -1, 80, 80, 80, 80]).is_err());
    }

    #[test]
    fn try_from_values_accepts_bounds() {
        let scores = SkillScores::try_from_values([0, 100, 50, 50, 50, 50]).unwrap();
        assert_eq!(scores.striking, 0);
        assert_eq!(scores.grappling, 100);
    }

    #[test]
    fn dimension_names_and_labels() {
        assert_eq!(SkillDimension::Defense.name(), "defense");
        assert_eq!(SkillDimension::Defense.label(), "Defense");
        assert_eq!(SkillDimension::Technique.to_string(), "technique");
    }
}
