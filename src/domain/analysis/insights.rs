//! Insight generator - threshold-based strengths, weaknesses and recommendations.

use serde::{Deserialize, Serialize};

use super::{SkillDimension, SkillScores};

/// Scores at or above this value are reported as strengths.
pub const STRENGTH_THRESHOLD: u8 = 80;

/// Scores below this value are reported as weaknesses.
pub const WEAKNESS_THRESHOLD: u8 = 65;

/// Strength used when no dimension reaches the strength threshold.
pub const BALANCED_STRENGTH: &str = "Balanced skill set across all areas";

/// Recommendation used when no dimension falls below the weakness threshold.
pub const CONTINUE_RECOMMENDATION: &str =
    "Continue current training regimen with minor adjustments";

/// Human-readable annotations for a skill profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

pub struct InsightGenerator;

impl InsightGenerator {
    /// Annotates six scores.
    ///
    /// Dimensions are visited in canonical order, so list order is stable.
    /// Strengths and recommendations are never empty.
    pub fn generate(scores: &SkillScores) -> Insights {
        let mut insights = Insights::default();

        for (dimension, score) in scores.iter() {
            if score >= STRENGTH_THRESHOLD {
                insights.strengths.push(strength_text(dimension));
            } else if score < WEAKNESS_THRESHOLD {
                insights.weaknesses.push(weakness_text(dimension));
                insights.recommendations.push(recommendation_text(dimension));
            }
        }

        if insights.strengths.is_empty() {
            insights.strengths.push(BALANCED_STRENGTH.to_string());
        }
        if insights.recommendations.is_empty() {
            insights
                .recommendations
                .push(CONTINUE_RECOMMENDATION.to_string());
        }

        insights
    }
}

fn strength_text(dimension: SkillDimension) -> String {
    format!("Excellent {} performance", dimension.name())
}

fn weakness_text(dimension: SkillDimension) -> String {
    format!("{} needs improvement", dimension.label())
}

fn recommendation_text(dimension: SkillDimension) -> String {
    format!("Focus on {} training with additional sessions", dimension.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_scores_become_strengths() {
        let scores = SkillScores::from_array([85, 70, 70, 80, 70, 70]);
        let insights = InsightGenerator::generate(&scores);

        assert_eq!(
            insights.strengths,
            vec![
                "Excellent striking performance".to_string(),
                "Excellent defense performance".to_string(),
            ]
        );
        assert!(insights.weaknesses.is_empty());
        assert_eq!(insights.recommendations, vec![CONTINUE_RECOMMENDATION.to_string()]);
    }

    #[test]
    fn low_scores_become_weaknesses_with_matching_recommendations() {
        let scores = SkillScores::from_array([70, 50, 64, 70, 70, 70]);
        let insights = InsightGenerator::generate(&scores);

        assert_eq!(
            insights.weaknesses,
            vec![
                "Grappling needs improvement".to_string(),
                "Cardio needs improvement".to_string(),
            ]
        );
        assert_eq!(
            insights.recommendations,
            vec![
                "Focus on grappling training with additional sessions".to_string(),
                "Focus on cardio training with additional sessions".to_string(),
            ]
        );
        assert_eq!(insights.strengths, vec![BALANCED_STRENGTH.to_string()]);
    }

    #[test]
    fn threshold_edges() {
        // 65 is not a weakness, 79 is not a strength
        let scores = SkillScores::from_array([65, 79, 65, 79, 65, 79]);
        let insights = InsightGenerator::generate(&scores);

        assert!(insights.weaknesses.is_empty());
        assert_eq!(insights.strengths, vec![BALANCED_STRENGTH.to_string()]);
    }

    #[test]
    fn aggression_and_technique_are_annotated() {
        let scores = SkillScores::from_array([70, 70, 70, 70, 90, 40]);
        let insights = InsightGenerator::generate(&scores);

        assert_eq!(insights.strengths, vec!["Excellent aggression performance".to_string()]);
        assert_eq!(insights.weaknesses, vec!["Technique needs improvement".to_string()]);
    }

    #[test]
    fn order_follows_dimension_order() {
        let scores = SkillScores::from_array([90, 90, 90, 90, 90, 90]);
        let insights = InsightGenerator::generate(&scores);

        let expected: Vec<String> = SkillDimension::ALL
            .iter()
            .map(|d| format!("Excellent {} performance", d.name()))
            .collect();
        assert_eq!(insights.strengths, expected);
    }
}
