//! Performance prediction from a freshly scored profile.

use serde::{Deserialize, Serialize};

use super::{ScoringHeuristic, ScoringInput, SkillProfile};
use crate::domain::fighter::Fighter;
use crate::ports::RandomSource;

/// Total width of the noise band around the overall score (plus or minus half).
pub const PREDICTION_SPREAD: f64 = 10.0;

/// Predicted next-fight performance score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformancePrediction {
    pub predicted_score: f64,
    pub profile: SkillProfile,
}

impl PerformancePrediction {
    /// Scores the fighter and predicts from the resulting overall score.
    ///
    /// Randomized twice over: once for the profile, once for the variance.
    pub fn for_fighter(fighter: &Fighter, rng: &dyn RandomSource) -> Self {
        let profile = ScoringHeuristic::score(&ScoringInput::from_fighter(fighter), rng);
        Self {
            predicted_score: predict_performance(profile.overall_score, rng),
            profile,
        }
    }
}

/// Overall score plus uniform variance, clamped to `[0, 100]` and rounded
/// to one decimal place.
pub fn predict_performance(overall_score: u8, rng: &dyn RandomSource) -> f64 {
    let variance = (rng.next_unit() - 0.5) * PREDICTION_SPREAD;
    let predicted = (f64::from(overall_score) + variance).clamp(0.0, 100.0);
    (predicted * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::random::{FixedRandomSource, SeededRandomSource};

    #[test]
    fn midpoint_draw_predicts_overall() {
        assert_eq!(predict_performance(77, &FixedRandomSource::new(0.5)), 77.0);
    }

    #[test]
    fn variance_stays_within_spread() {
        let rng = SeededRandomSource::new(3);
        for _ in 0..200 {
            let predicted = predict_performance(60, &rng);
            assert!((55.0..=65.0).contains(&predicted), "{predicted}");
        }
    }

    #[test]
    fn prediction_clamps_at_ceiling() {
        assert_eq!(predict_performance(99, &FixedRandomSource::new(0.99)), 100.0);
    }

    #[test]
    fn prediction_clamps_at_floor() {
        assert_eq!(predict_performance(2, &FixedRandomSource::new(0.0)), 0.0);
    }

    #[test]
    fn low_draw_lowers_prediction() {
        assert_eq!(predict_performance(80, &FixedRandomSource::new(0.0)), 75.0);
    }
}
