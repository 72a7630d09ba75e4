//! GetTrainingPlanHandler - Suggested training blocks from the latest analysis.

use std::sync::Arc;

use crate::domain::analysis::{AnalysisError, TrainingPlan};
use crate::domain::foundation::{FighterId, Repository};
use crate::ports::{AnalysisRepository, FighterRepository};

#[derive(Debug, Clone)]
pub struct GetTrainingPlanQuery {
    pub fighter_id: FighterId,
}

pub struct GetTrainingPlanHandler {
    fighters: Arc<dyn FighterRepository>,
    analyses: Arc<dyn AnalysisRepository>,
}

impl GetTrainingPlanHandler {
    pub fn new(
        fighters: Arc<dyn FighterRepository>,
        analyses: Arc<dyn AnalysisRepository>,
    ) -> Self {
        Self { fighters, analyses }
    }

    /// # Errors
    ///
    /// - `FighterNotFound` for an unknown fighter
    /// - `NoAnalysis` when the fighter has never been analyzed
    pub async fn handle(&self, query: GetTrainingPlanQuery) -> Result<TrainingPlan, AnalysisError> {
        if !self.fighters.exists(&query.fighter_id).await? {
            return Err(AnalysisError::FighterNotFound(query.fighter_id));
        }

        let latest = self
            .analyses
            .find_latest_by_fighter(&query.fighter_id)
            .await?
            .ok_or_else(|| AnalysisError::NoAnalysis(query.fighter_id.clone()))?;

        let plan = TrainingPlan::from_scores(latest.scores());
        tracing::debug!(
            fighter_id = %query.fighter_id,
            items = plan.items.len(),
            "Training plan built"
        );
        Ok(plan)
    }
}
