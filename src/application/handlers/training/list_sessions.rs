//! ListSessionsHandler - Query handler for a fighter's training schedule.

use std::sync::Arc;

use crate::domain::foundation::FighterId;
use crate::domain::training::{TrainingError, TrainingSession};
use crate::ports::TrainingSessionRepository;

#[derive(Debug, Clone)]
pub struct ListSessionsQuery {
    pub fighter_id: FighterId,
}

pub struct ListSessionsHandler {
    sessions: Arc<dyn TrainingSessionRepository>,
}

impl ListSessionsHandler {
    pub fn new(sessions: Arc<dyn TrainingSessionRepository>) -> Self {
        Self { sessions }
    }

    /// Earliest first. An unknown fighter has an empty schedule.
    pub async fn handle(
        &self,
        query: ListSessionsQuery,
    ) -> Result<Vec<TrainingSession>, TrainingError> {
        let sessions = self.sessions.find_by_fighter(&query.fighter_id).await?;
        tracing::debug!(
            fighter_id = %query.fighter_id,
            count = sessions.len(),
            "Listed training sessions"
        );
        Ok(sessions)
    }
}
