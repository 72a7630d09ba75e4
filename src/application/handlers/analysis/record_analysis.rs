//! RecordAnalysisHandler - Stores an analysis with caller-supplied scores.

use std::sync::Arc;

use crate::domain::analysis::{Analysis, AnalysisError, Insights, SkillScores};
use crate::domain::foundation::{FighterId, Repository};
use crate::ports::{AnalysisRepository, FighterRepository};

/// Command to record an analysis from externally produced scores.
///
/// Scores are in dimension order: striking, grappling, cardio, defense,
/// aggression, technique.
#[derive(Debug, Clone)]
pub struct RecordAnalysisCommand {
    pub fighter_id: String,
    pub scores: [i64; 6],
    pub insights: Option<Insights>,
}

pub struct RecordAnalysisHandler {
    fighters: Arc<dyn FighterRepository>,
    analyses: Arc<dyn AnalysisRepository>,
}

impl RecordAnalysisHandler {
    pub fn new(
        fighters: Arc<dyn FighterRepository>,
        analyses: Arc<dyn AnalysisRepository>,
    ) -> Self {
        Self { fighters, analyses }
    }

    /// Validates and stores the analysis.
    ///
    /// The overall score is always recomputed from the six scores.
    /// Insights are generated when the command carries none.
    pub async fn handle(&self, cmd: RecordAnalysisCommand) -> Result<Analysis, AnalysisError> {
        let fighter_id = FighterId::new(cmd.fighter_id)?;
        let scores = SkillScores::try_from_values(cmd.scores)?;

        if !self.fighters.exists(&fighter_id).await? {
            tracing::warn!(fighter_id = %fighter_id, "Analysis submitted for unknown fighter");
            return Err(AnalysisError::FighterNotFound(fighter_id));
        }

        let analysis = Analysis::from_scores(fighter_id, scores, cmd.insights);
        self.analyses.save(&analysis).await?;

        tracing::info!(
            fighter_id = %analysis.fighter_id(),
            analysis_id = %analysis.id(),
            "Analysis recorded"
        );
        Ok(analysis)
    }
}
