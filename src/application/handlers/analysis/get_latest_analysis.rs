//! GetLatestAnalysisHandler - Query handler for a fighter's newest analysis.

use std::sync::Arc;

use crate::domain::analysis::{Analysis, AnalysisError};
use crate::domain::foundation::FighterId;
use crate::ports::AnalysisRepository;

#[derive(Debug, Clone)]
pub struct GetLatestAnalysisQuery {
    pub fighter_id: FighterId,
}

pub struct GetLatestAnalysisHandler {
    analyses: Arc<dyn AnalysisRepository>,
}

impl GetLatestAnalysisHandler {
    pub fn new(analyses: Arc<dyn AnalysisRepository>) -> Self {
        Self { analyses }
    }

    pub async fn handle(&self, query: GetLatestAnalysisQuery) -> Result<Analysis, AnalysisError> {
        match self
            .analyses
            .find_latest_by_fighter(&query.fighter_id)
            .await?
        {
            Some(analysis) => Ok(analysis),
            None => {
                tracing::warn!(fighter_id = %query.fighter_id, "No analysis on record");
                Err(AnalysisError::NoAnalysis(query.fighter_id))
            }
        }
    }
}
