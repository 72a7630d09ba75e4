//! PredictPerformanceHandler - Next-fight score estimate for a fighter.

use std::sync::Arc;

use crate::domain::analysis::{AnalysisError, PerformancePrediction};
use crate::domain::foundation::{FighterId, Repository};
use crate::ports::{FighterRepository, RandomSource};

#[derive(Debug, Clone)]
pub struct PredictPerformanceQuery {
    pub fighter_id: FighterId,
}

/// Scores the fighter afresh and predicts from that profile.
///
/// Nothing is persisted.
pub struct PredictPerformanceHandler {
    fighters: Arc<dyn FighterRepository>,
    rng: Arc<dyn RandomSource>,
}

impl PredictPerformanceHandler {
    pub fn new(fighters: Arc<dyn FighterRepository>, rng: Arc<dyn RandomSource>) -> Self {
        Self { fighters, rng }
    }

    pub async fn handle(
        &self,
        query: PredictPerformanceQuery,
    ) -> Result<PerformancePrediction, AnalysisError> {
        let fighter = self
            .fighters
            .find_by_id(&query.fighter_id)
            .await?
            .ok_or(AnalysisError::FighterNotFound(query.fighter_id))?;

        let prediction = PerformancePrediction::for_fighter(&fighter, self.rng.as_ref());
        tracing::debug!(
            fighter_id = %fighter.id(),
            predicted_score = prediction.predicted_score,
            "Performance predicted"
        );
        Ok(prediction)
    }
}
