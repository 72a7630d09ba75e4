//! Training session repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, FighterId, Repository, TrainingSessionId};
use crate::domain::training::TrainingSession;

/// Repository port for training sessions.
#[async_trait]
pub trait TrainingSessionRepository: Repository<TrainingSession, TrainingSessionId> {
    /// Sessions for a fighter ordered by scheduled time, earliest first.
    async fn find_by_fighter(
        &self,
        fighter_id: &FighterId,
    ) -> Result<Vec<TrainingSession>, DomainError>;

    /// Removes all sessions for a fighter, returning how many were removed.
    async fn delete_by_fighter(&self, fighter_id: &FighterId) -> Result<usize, DomainError>;
}
