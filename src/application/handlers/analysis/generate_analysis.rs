//! GenerateAnalysisHandler - Scores a stored fighter and records the result.

use std::sync::Arc;

use crate::domain::analysis::{Analysis, AnalysisError};
use crate::domain::foundation::{FighterId, Repository};
use crate::ports::{AnalysisRepository, FighterRepository, RandomSource};

/// Command to run the scoring heuristic for one fighter.
#[derive(Debug, Clone)]
pub struct GenerateAnalysisCommand {
    pub fighter_id: FighterId,
}

/// Handler for generating analyses.
///
/// Every call draws fresh randomness, so two calls for the same fighter
/// store two different analyses.
pub struct GenerateAnalysisHandler {
    fighters: Arc<dyn FighterRepository>,
    analyses: Arc<dyn AnalysisRepository>,
    rng: Arc<dyn RandomSource>,
}

impl GenerateAnalysisHandler {
    pub fn new(
        fighters: Arc<dyn FighterRepository>,
        analyses: Arc<dyn AnalysisRepository>,
        rng: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            fighters,
            analyses,
            rng,
        }
    }

    pub async fn handle(&self, cmd: GenerateAnalysisCommand) -> Result<Analysis, AnalysisError> {
        let fighter = self
            .fighters
            .find_by_id(&cmd.fighter_id)
            .await?
            .ok_or_else(|| AnalysisError::FighterNotFound(cmd.fighter_id.clone()))?;

        let analysis = Analysis::generate(&fighter, self.rng.as_ref());
        self.analyses.save(&analysis).await?;

        tracing::info!(
            fighter_id = %fighter.id(),
            analysis_id = %analysis.id(),
            overall_score = analysis.overall_score(),
            "Analysis generated"
        );
        Ok(analysis)
    }
}
