//! Scoring heuristic - derives a skill profile from fighter attributes.
//!
//! Each dimension starts from a base range plus uniform noise, then
//! receives style, win-rate and age adjustments before being clamped to
//! `[SCORE_FLOOR, SCORE_CEILING]` and rounded.
//!
//! # Non-determinism
//!
//! Scoring is randomized on purpose: two calls with the same fighter yield
//! different (but equally valid) profiles. Inject a seeded or fixed
//! [`RandomSource`] to make results reproducible.

use serde::{Deserialize, Serialize};

use super::{SkillDimension, SkillScores};
use crate::domain::fighter::{FightRecord, Fighter, FightingStyle};
use crate::ports::RandomSource;

/// Lowest score a heuristic dimension can take.
pub const SCORE_FLOOR: f64 = 30.0;

/// Highest score a heuristic dimension can take.
pub const SCORE_CEILING: f64 = 100.0;

/// Bonus points granted for a perfect win rate.
pub const WIN_RATE_BONUS_SCALE: f64 = 10.0;

/// Cardio multiplier for fighters younger than 25.
pub const YOUNG_CARDIO_FACTOR: f64 = 0.9;

/// Cardio multiplier for fighters older than 35.
pub const VETERAN_CARDIO_FACTOR: f64 = 0.85;

/// Starting point and noise width for one dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseRange {
    pub start: f64,
    pub width: f64,
}

/// Attributes the heuristic reads from a fighter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringInput {
    pub style: FightingStyle,
    pub record: FightRecord,
    pub age: u32,
}

impl ScoringInput {
    pub fn from_fighter(fighter: &Fighter) -> Self {
        Self {
            style: fighter.style(),
            record: fighter.record(),
            age: fighter.age(),
        }
    }
}

/// Dimension values after every adjustment but before clamping and rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawSkills([f64; 6]);

impl RawSkills {
    pub fn get(&self, dimension: SkillDimension) -> f64 {
        let index = SkillDimension::ALL
            .iter()
            .position(|d| *d == dimension)
            .unwrap_or_default();
        self.0[index]
    }

    /// Clamps each value to the score bounds and rounds to an integer.
    pub fn finalize(&self) -> SkillScores {
        SkillScores::from_array(self.0.map(clamp_and_round))
    }
}

/// Six scores plus their derived overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillProfile {
    #[serde(flatten)]
    pub scores: SkillScores,
    pub overall_score: u8,
}

impl From<SkillScores> for SkillProfile {
    fn from(scores: SkillScores) -> Self {
        Self {
            overall_score: scores.overall(),
            scores,
        }
    }
}

/// Randomized style/record/age scoring.
pub struct ScoringHeuristic;

impl ScoringHeuristic {
    /// Produces a complete skill profile.
    ///
    /// Every score lies in `[30, 100]` and the overall score is the rounded
    /// mean of the six returned scores.
    pub fn score(input: &ScoringInput, rng: &dyn RandomSource) -> SkillProfile {
        Self::raw(input, rng).finalize().into()
    }

    /// Computes adjusted values without clamping or rounding.
    ///
    /// Draws exactly one value from `rng` per dimension, in canonical order.
    pub fn raw(input: &ScoringInput, rng: &dyn RandomSource) -> RawSkills {
        let win_bonus = win_rate_bonus(&input.record);
        let age_factor = cardio_age_factor(input.age);

        let mut values = [0.0; 6];
        for (slot, dimension) in values.iter_mut().zip(SkillDimension::ALL) {
            let range = base_range(dimension);
            let mut value = range.start + rng.next_unit() * range.width;
            value += style_adjustment(input.style, dimension);
            if receives_win_bonus(dimension) {
                value += win_bonus;
            }
            if dimension == SkillDimension::Cardio {
                value *= age_factor;
            }
            *slot = value;
        }
        RawSkills(values)
    }
}

/// Base range for each dimension.
pub fn base_range(dimension: SkillDimension) -> BaseRange {
    let (start, width) = match dimension {
        SkillDimension::Striking => (70.0, 25.0),
        SkillDimension::Grappling => (60.0, 30.0),
        SkillDimension::Cardio => (65.0, 25.0),
        SkillDimension::Defense => (70.0, 25.0),
        SkillDimension::Aggression => (65.0, 30.0),
        SkillDimension::Technique => (70.0, 25.0),
    };
    BaseRange { start, width }
}

/// Additive adjustment a style applies to a dimension.
pub fn style_adjustment(style: FightingStyle, dimension: SkillDimension) -> f64 {
    use FightingStyle::*;
    use SkillDimension::*;

    match (style, dimension) {
        (Striker, Striking) => 15.0,
        (Striker, Technique) => 10.0,
        (Striker, Grappling) => -10.0,

        (Grappler, Grappling) => 20.0,
        (Grappler, Striking) => -10.0,
        (Grappler, Cardio) => 5.0,

        (Wrestler, Grappling) => 15.0,
        (Wrestler, Cardio) => 10.0,
        (Wrestler, Striking) => -5.0,

        (Mixed, Striking) | (Mixed, Grappling) | (Mixed, Technique) => 5.0,

        _ => 0.0,
    }
}

/// Bonus added to striking, defense and technique, proportional to win rate.
pub fn win_rate_bonus(record: &FightRecord) -> f64 {
    record.win_rate() * WIN_RATE_BONUS_SCALE
}

fn receives_win_bonus(dimension: SkillDimension) -> bool {
    matches!(
        dimension,
        SkillDimension::Striking | SkillDimension::Defense | SkillDimension::Technique
    )
}

/// Multiplier applied to cardio; peak-age fighters (25 to 35) are unaffected.
pub fn cardio_age_factor(age: u32) -> f64 {
    if age < 25 {
        YOUNG_CARDIO_FACTOR
    } else if age > 35 {
        VETERAN_CARDIO_FACTOR
    } else {
        1.0
    }
}

fn clamp_and_round(value: f64) -> u8 {
    value.clamp(SCORE_FLOOR, SCORE_CEILING).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::random::{FixedRandomSource, SeededRandomSource};
    use crate::domain::analysis::InsightGenerator;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Replays six draws in a loop.
    struct Draws {
        values: [f64; 6],
        next: AtomicUsize,
    }

    impl Draws {
        fn new(values: [f64; 6]) -> Self {
            Self {
                values,
                next: AtomicUsize::new(0),
            }
        }
    }

    impl RandomSource for Draws {
        fn next_unit(&self) -> f64 {
            let i = self.next.fetch_add(1, Ordering::SeqCst);
            self.values[i % 6]
        }
    }

    fn input(style: &str, record: &str, age: u32) -> ScoringInput {
        ScoringInput {
            style: FightingStyle::from_tag(style),
            record: record.parse().unwrap(),
            age,
        }
    }

    fn mean_of(
        input: &ScoringInput,
        rng: &dyn RandomSource,
        samples: usize,
        dimension: SkillDimension,
    ) -> f64 {
        let total: f64 = (0..samples)
            .map(|_| f64::from(ScoringHeuristic::score(input, rng).scores.get(dimension)))
            .sum();
        total / samples as f64
    }

    #[test]
    fn zero_draws_give_base_starts_for_unclassified_debut() {
        let rng = FixedRandomSource::new(0.0);
        let raw = ScoringHeuristic::raw(&input("boxer", "0-0-0", 30), &rng);

        assert_eq!(raw.get(SkillDimension::Striking), 70.0);
        assert_eq!(raw.get(SkillDimension::Grappling), 60.0);
        assert_eq!(raw.get(SkillDimension::Cardio), 65.0);
        assert_eq!(raw.get(SkillDimension::Defense), 70.0);
        assert_eq!(raw.get(SkillDimension::Aggression), 65.0);
        assert_eq!(raw.get(SkillDimension::Technique), 70.0);
    }

    #[test]
    fn striker_adjustments_apply() {
        let rng = FixedRandomSource::new(0.0);
        let raw = ScoringHeuristic::raw(&input("Striker", "0-0-0", 30), &rng);

        assert_eq!(raw.get(SkillDimension::Striking), 85.0);
        assert_eq!(raw.get(SkillDimension::Technique), 80.0);
        assert_eq!(raw.get(SkillDimension::Grappling), 50.0);
    }

    #[test]
    fn style_table_matches_expected_shape() {
        use FightingStyle::*;
        use SkillDimension::*;

        assert_eq!(style_adjustment(Grappler, Grappling), 20.0);
        assert_eq!(style_adjustment(Grappler, Striking), -10.0);
        assert_eq!(style_adjustment(Wrestler, Cardio), 10.0);
        assert_eq!(style_adjustment(Wrestler, Striking), -5.0);
        assert_eq!(style_adjustment(Mixed, Technique), 5.0);
        assert_eq!(style_adjustment(Mixed, Defense), 0.0);
        for dimension in SkillDimension::ALL {
            assert_eq!(style_adjustment(Unclassified, dimension), 0.0);
        }
    }

    #[test]
    fn win_rate_bonus_is_bounded_and_monotonic() {
        let undefeated = win_rate_bonus(&"20-0-0".parse().unwrap());
        let winless = win_rate_bonus(&"0-20-0".parse().unwrap());

        assert_eq!(undefeated, WIN_RATE_BONUS_SCALE);
        assert_eq!(winless, 0.0);
        assert!(undefeated > winless);
    }

    #[test]
    fn extreme_record_scores_within_bounds() {
        let rng = FixedRandomSource::new(0.999);
        let profile = ScoringHeuristic::score(&input("striker", "4294967295-1-0", 27), &rng);

        for (_, score) in profile.scores.iter() {
            assert!((30..=100).contains(&score), "{score}");
        }
    }

    #[test]
    fn win_rate_bonus_only_touches_striking_defense_technique() {
        let rng = FixedRandomSource::new(0.3);
        let winner = ScoringHeuristic::raw(&input("mixed", "20-0-0", 30), &rng);
        let loser = ScoringHeuristic::raw(&input("mixed", "0-20-0", 30), &rng);

        for dimension in SkillDimension::ALL {
            let delta = winner.get(dimension) - loser.get(dimension);
            let expected = if receives_win_bonus(dimension) { 10.0 } else { 0.0 };
            assert!((delta - expected).abs() < 1e-9, "{dimension}: {delta}");
        }
    }

    #[test]
    fn undefeated_record_raises_sampled_means() {
        let winner = input("mixed", "20-0-0", 30);
        let loser = input("mixed", "0-20-0", 30);

        for dimension in [
            SkillDimension::Striking,
            SkillDimension::Defense,
            SkillDimension::Technique,
        ] {
            let rng = SeededRandomSource::new(7);
            let high = mean_of(&winner, &rng, 400, dimension);
            let rng = SeededRandomSource::new(7);
            let low = mean_of(&loser, &rng, 400, dimension);
            assert!(high > low, "{dimension}: {high} <= {low}");
        }
    }

    #[test]
    fn cardio_age_factor_bands() {
        assert_eq!(cardio_age_factor(22), YOUNG_CARDIO_FACTOR);
        assert_eq!(cardio_age_factor(25), 1.0);
        assert_eq!(cardio_age_factor(35), 1.0);
        assert_eq!(cardio_age_factor(40), VETERAN_CARDIO_FACTOR);
    }

    #[test]
    fn age_penalizes_cardio_with_identical_draws() {
        let draws = [0.4, 0.6, 0.8, 0.2, 0.5, 0.9];
        let cardio_at = |age| {
            ScoringHeuristic::raw(&input("wrestler", "10-2-0", age), &Draws::new(draws))
                .get(SkillDimension::Cardio)
        };

        assert!(cardio_at(22) <= cardio_at(30));
        assert!(cardio_at(40) <= cardio_at(30));
    }

    #[test]
    fn age_does_not_touch_other_dimensions() {
        let draws = [0.4, 0.6, 0.8, 0.2, 0.5, 0.9];
        let young = ScoringHeuristic::raw(&input("striker", "5-5-0", 21), &Draws::new(draws));
        let peak = ScoringHeuristic::raw(&input("striker", "5-5-0", 30), &Draws::new(draws));

        for dimension in SkillDimension::ALL {
            if dimension != SkillDimension::Cardio {
                assert_eq!(young.get(dimension), peak.get(dimension));
            }
        }
    }

    #[test]
    fn scores_clamp_to_ceiling() {
        // 70 + 0.999 * 25 + 15 + 10 exceeds 100
        let rng = FixedRandomSource::new(0.999);
        let profile = ScoringHeuristic::score(&input("striker", "30-0-0", 30), &rng);
        assert_eq!(profile.scores.striking, 100);
    }

    #[test]
    fn striker_outscores_grappler_on_striking_and_technique() {
        let striker = input("striker", "15-3-0", 27);
        let grappler = input("grappler", "15-3-0", 27);

        for dimension in [SkillDimension::Striking, SkillDimension::Technique] {
            let rng = SeededRandomSource::new(42);
            let striker_mean = mean_of(&striker, &rng, 500, dimension);
            let rng = SeededRandomSource::new(42);
            let grappler_mean = mean_of(&grappler, &rng, 500, dimension);
            assert!(
                striker_mean > grappler_mean,
                "{dimension}: striker {striker_mean} vs grappler {grappler_mean}"
            );
        }
    }

    #[test]
    fn seeded_sources_reproduce_profiles() {
        let fighter = input("mixed", "18-2-0", 25);
        let a = ScoringHeuristic::score(&fighter, &SeededRandomSource::new(99));
        let b = ScoringHeuristic::score(&fighter, &SeededRandomSource::new(99));
        assert_eq!(a, b);
    }

    #[test]
    fn profile_serializes_flat() {
        let profile = SkillProfile::from(SkillScores::from_array([85, 67, 72, 78, 82, 79]));
        let json = serde_json::to_value(profile).unwrap();
        assert_eq!(json["striking"], 85);
        assert_eq!(json["overallScore"], 77);
    }

    fn style_tag() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("striker".to_string()),
            Just("Grappler".to_string()),
            Just("WRESTLER".to_string()),
            Just("mixed".to_string()),
            "[a-z ]{0,12}",
        ]
    }

    proptest! {
        #[test]
        fn scores_stay_within_bounds(
            style in style_tag(),
            wins in 0u32..60,
            losses in 0u32..60,
            age in 16u32..=70,
            draws in proptest::array::uniform6(0.0f64..1.0),
        ) {
            let input = ScoringInput {
                style: FightingStyle::from_tag(&style),
                record: FightRecord::new(wins, losses, 0),
                age,
            };
            let profile = ScoringHeuristic::score(&input, &Draws::new(draws));

            for (_, score) in profile.scores.iter() {
                prop_assert!((30..=100).contains(&score));
            }
        }

        #[test]
        fn overall_is_exact_rounded_mean(
            style in style_tag(),
            wins in 0u32..60,
            losses in 0u32..60,
            age in 16u32..=70,
            draws in proptest::array::uniform6(0.0f64..1.0),
        ) {
            let input = ScoringInput {
                style: FightingStyle::from_tag(&style),
                record: FightRecord::new(wins, losses, 0),
                age,
            };
            let profile = ScoringHeuristic::score(&input, &Draws::new(draws));

            let sum: u32 = profile.scores.iter().map(|(_, s)| u32::from(s)).sum();
            let expected = (f64::from(sum) / 6.0).round() as u8;
            prop_assert_eq!(profile.overall_score, expected);
        }

        #[test]
        fn generated_insights_are_never_empty(
            style in style_tag(),
            wins in 0u32..60,
            losses in 0u32..60,
            age in 16u32..=70,
            draws in proptest::array::uniform6(0.0f64..1.0),
        ) {
            let input = ScoringInput {
                style: FightingStyle::from_tag(&style),
                record: FightRecord::new(wins, losses, 0),
                age,
            };
            let profile = ScoringHeuristic::score(&input, &Draws::new(draws));
            let insights = InsightGenerator::generate(&profile.scores);

            prop_assert!(!insights.strengths.is_empty());
            prop_assert!(!insights.recommendations.is_empty());
        }
    }
}
