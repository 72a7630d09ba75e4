//! ListFightersHandler - Query handler for the fighter roster.

use std::sync::Arc;

use crate::domain::fighter::{Fighter, FighterError};
use crate::ports::FighterRepository;

pub struct ListFightersHandler {
    repository: Arc<dyn FighterRepository>,
}

impl ListFightersHandler {
    pub fn new(repository: Arc<dyn FighterRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Fighter>, FighterError> {
        let fighters = self.repository.find_all().await?;
        tracing::debug!(count = fighters.len(), "Listed fighters");
        Ok(fighters)
    }
}
