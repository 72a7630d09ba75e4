//! GetFighterHandler - Query handler for a single fighter.

use std::sync::Arc;

use crate::domain::fighter::{Fighter, FighterError};
use crate::domain::foundation::{FighterId, Repository};
use crate::ports::FighterRepository;

/// Query to fetch one fighter.
#[derive(Debug, Clone)]
pub struct GetFighterQuery {
    pub fighter_id: FighterId,
}

pub struct GetFighterHandler {
    repository: Arc<dyn FighterRepository>,
}

impl GetFighterHandler {
    pub fn new(repository: Arc<dyn FighterRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetFighterQuery) -> Result<Fighter, FighterError> {
        tracing::debug!(fighter_id = %query.fighter_id, "Fetching fighter");
        self.repository
            .find_by_id(&query.fighter_id)
            .await?
            .ok_or(FighterError::NotFound(query.fighter_id))
    }
}
