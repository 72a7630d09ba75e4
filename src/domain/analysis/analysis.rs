//! Analysis record - a point-in-time skill snapshot for one fighter.

use serde::{Deserialize, Serialize};

use super::{InsightGenerator, Insights, ScoringHeuristic, ScoringInput, SkillProfile, SkillScores};
use crate::domain::fighter::Fighter;
use crate::domain::foundation::{AnalysisId, FighterId, Timestamp};
use crate::ports::RandomSource;

/// Immutable skill snapshot with derived insights.
///
/// Serialized flat: the six scores, `overallScore`, the three insight lists
/// and `createdAt` sit alongside `id` and `fighterId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    id: AnalysisId,
    fighter_id: FighterId,
    #[serde(flatten)]
    profile: SkillProfile,
    #[serde(flatten)]
    insights: Insights,
    created_at: Timestamp,
}

impl Analysis {
    /// Scores a fighter and annotates the result.
    ///
    /// Each call draws fresh noise from `rng`, so repeated calls produce
    /// different analyses.
    pub fn generate(fighter: &Fighter, rng: &dyn RandomSource) -> Self {
        let profile = ScoringHeuristic::score(&ScoringInput::from_fighter(fighter), rng);
        let insights = InsightGenerator::generate(&profile.scores);
        Self::restore(
            AnalysisId::generate(),
            fighter.id().clone(),
            profile.scores,
            insights,
            Timestamp::now(),
        )
    }

    /// Builds an analysis from externally supplied scores.
    ///
    /// The overall score is always derived; insights are generated when the
    /// caller has none.
    pub fn from_scores(
        fighter_id: FighterId,
        scores: SkillScores,
        insights: Option<Insights>,
    ) -> Self {
        let insights = insights.unwrap_or_else(|| InsightGenerator::generate(&scores));
        Self::restore(
            AnalysisId::generate(),
            fighter_id,
            scores,
            insights,
            Timestamp::now(),
        )
    }

    /// Reconstitutes a stored analysis.
    pub fn restore(
        id: AnalysisId,
        fighter_id: FighterId,
        scores: SkillScores,
        insights: Insights,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            fighter_id,
            profile: scores.into(),
            insights,
            created_at,
        }
    }

    pub fn id(&self) -> &AnalysisId {
        &self.id
    }

    pub fn fighter_id(&self) -> &FighterId {
        &self.fighter_id
    }

    pub fn scores(&self) -> &SkillScores {
        &self.profile.scores
    }

    pub fn overall_score(&self) -> u8 {
        self.profile.overall_score
    }

    pub fn strengths(&self) -> &[String] {
        &self.insights.strengths
    }

    pub fn weaknesses(&self) -> &[String] {
        &self.insights.weaknesses
    }

    pub fn recommendations(&self) -> &[String] {
        &self.insights.recommendations
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}
