//! DeleteFighterHandler - Command handler for removing a fighter.
//!
//! Deletion cascades: analyses, training sessions and performance records
//! that belong to the fighter are removed first.

use std::sync::Arc;

use crate::domain::fighter::FighterError;
use crate::domain::foundation::{FighterId, Repository};
use crate::ports::{
    AnalysisRepository, FighterRepository, PerformanceRepository, TrainingSessionRepository,
};

/// Command to delete a fighter and everything recorded for them.
#[derive(Debug, Clone)]
pub struct DeleteFighterCommand {
    pub fighter_id: FighterId,
}

/// Counts of dependent records removed along with the fighter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteFighterResult {
    pub analyses_removed: usize,
    pub training_sessions_removed: usize,
    pub performance_records_removed: usize,
}

pub struct DeleteFighterHandler {
    fighters: Arc<dyn FighterRepository>,
    analyses: Arc<dyn AnalysisRepository>,
    training: Arc<dyn TrainingSessionRepository>,
    performance: Arc<dyn PerformanceRepository>,
}

impl DeleteFighterHandler {
    pub fn new(
        fighters: Arc<dyn FighterRepository>,
        analyses: Arc<dyn AnalysisRepository>,
        training: Arc<dyn TrainingSessionRepository>,
        performance: Arc<dyn PerformanceRepository>,
    ) -> Self {
        Self {
            fighters,
            analyses,
            training,
            performance,
        }
    }

    pub async fn handle(
        &self,
        cmd: DeleteFighterCommand,
    ) -> Result<DeleteFighterResult, FighterError> {
        if !self.fighters.exists(&cmd.fighter_id).await? {
            tracing::warn!(fighter_id = %cmd.fighter_id, "Delete requested for unknown fighter");
            return Err(FighterError::NotFound(cmd.fighter_id));
        }

        let result = DeleteFighterResult {
            analyses_removed: self.analyses.delete_by_fighter(&cmd.fighter_id).await?,
            training_sessions_removed: self.training.delete_by_fighter(&cmd.fighter_id).await?,
            performance_records_removed: self
                .performance
                .delete_by_fighter(&cmd.fighter_id)
                .await?,
        };

        self.fighters.delete(&cmd.fighter_id).await.map_err(|e| {
            if e.is_not_found() {
                FighterError::NotFound(cmd.fighter_id.clone())
            } else {
                e.into()
            }
        })?;

        tracing::info!(
            fighter_id = %cmd.fighter_id,
            analyses = result.analyses_removed,
            training_sessions = result.training_sessions_removed,
            performance_records = result.performance_records_removed,
            "Fighter deleted"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::seed_demo_data;
    use crate::application::handlers::test_support::{fighter_id, Repos};

    fn handler(repos: &Repos) -> DeleteFighterHandler {
        DeleteFighterHandler::new(
            repos.fighters.clone(),
            repos.analyses.clone(),
            repos.training.clone(),
            repos.performance.clone(),
        )
    }

    #[tokio::test]
    async fn cascades_to_dependent_records() {
        let repos = Repos::new();
        seed_demo_data(
            repos.fighters.as_ref(),
            repos.analyses.as_ref(),
            repos.training.as_ref(),
            repos.performance.as_ref(),
        )
        .await
        .unwrap();

        let result = handler(&repos)
            .handle(DeleteFighterCommand {
                fighter_id: fighter_id("1"),
            })
            .await
            .unwrap();

        assert_eq!(
            result,
            DeleteFighterResult {
                analyses_removed: 1,
                training_sessions_removed: 3,
                performance_records_removed: 6,
            }
        );
        assert!(!repos.fighters.exists(&fighter_id("1")).await.unwrap());
        assert!(repos.fighters.exists(&fighter_id("2")).await.unwrap());
        assert!(repos
            .performance
            .find_by_fighter(&fighter_id("1"))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn fighter_without_history_deletes_cleanly() {
        let repos = Repos::new();
        repos.add_fighter("9", "Wrestler").await;

        let result = handler(&repos)
            .handle(DeleteFighterCommand {
                fighter_id: fighter_id("9"),
            })
            .await
            .unwrap();

        assert_eq!(result, DeleteFighterResult::default());
    }

    #[tokio::test]
    async fn unknown_fighter_is_not_found() {
        let repos = Repos::new();

        let err = handler(&repos)
            .handle(DeleteFighterCommand {
                fighter_id: fighter_id("ghost"),
            })
            .await
            .unwrap_err();

        assert_eq!(err, FighterError::NotFound(fighter_id("ghost")));
    }
}
