//! ListAnalysesHandler - Query handler for a fighter's analysis history.

use std::sync::Arc;

use crate::domain::analysis::{Analysis, AnalysisError};
use crate::domain::foundation::FighterId;
use crate::ports::AnalysisRepository;

#[derive(Debug, Clone)]
pub struct ListAnalysesQuery {
    pub fighter_id: FighterId,
}

pub struct ListAnalysesHandler {
    analyses: Arc<dyn AnalysisRepository>,
}

impl ListAnalysesHandler {
    pub fn new(analyses: Arc<dyn AnalysisRepository>) -> Self {
        Self { analyses }
    }

    /// Newest first. An unknown fighter simply has no analyses.
    pub async fn handle(&self, query: ListAnalysesQuery) -> Result<Vec<Analysis>, AnalysisError> {
        let analyses = self.analyses.find_by_fighter(&query.fighter_id).await?;
        tracing::debug!(
            fighter_id = %query.fighter_id,
            count = analyses.len(),
            "Listed analyses"
        );
        Ok(analyses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::seed_demo_data;
    use crate::application::handlers::test_support::{fighter_id, Repos};

    #[tokio::test]
    async fn lists_seeded_analysis() {
        let repos = Repos::new();
        seed_demo_data(
            repos.fighters.as_ref(),
            repos.analyses.as_ref(),
            repos.training.as_ref(),
            repos.performance.as_ref(),
        )
        .await
        .unwrap();
        let handler = ListAnalysesHandler::new(repos.analyses.clone());

        let analyses = handler
            .handle(ListAnalysesQuery {
                fighter_id: fighter_id("1"),
            })
            .await
            .unwrap();

        assert_eq!(analyses.len(), 1);
        assert_eq!(analyses[0].id().as_str(), "a1");
    }

    #[tokio::test]
    async fn unknown_fighter_yields_empty_list() {
        let repos = Repos::new();
        let handler = ListAnalysesHandler::new(repos.analyses.clone());

        let analyses = handler
            .handle(ListAnalysesQuery {
                fighter_id: fighter_id("nobody"),
            })
            .await
            .unwrap();

        assert!(analyses.is_empty());
    }
}
