//! In-memory fighter repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::fighter::Fighter;
use crate::domain::foundation::{DomainError, ErrorCode, FighterId, Repository};
use crate::ports::FighterRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryFighterRepository {
    fighters: Arc<RwLock<HashMap<FighterId, Fighter>>>,
}

impl InMemoryFighterRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored fighters.
    pub async fn len(&self) -> usize {
        self.fighters.read().await.len()
    }
}

#[async_trait]
impl Repository<Fighter, FighterId> for InMemoryFighterRepository {
    async fn find_by_id(&self, id: &FighterId) -> Result<Option<Fighter>, DomainError> {
        Ok(self.fighters.read().await.get(id).cloned())
    }

    async fn save(&self, fighter: &Fighter) -> Result<(), DomainError> {
        let mut fighters = self.fighters.write().await;
        if fighters.contains_key(fighter.id()) {
            return Err(DomainError::new(
                ErrorCode::DuplicateId,
                format!("Fighter {} already exists", fighter.id()),
            ));
        }
        fighters.insert(fighter.id().clone(), fighter.clone());
        Ok(())
    }

    async fn update(&self, fighter: &Fighter) -> Result<(), DomainError> {
        let mut fighters = self.fighters.write().await;
        match fighters.get_mut(fighter.id()) {
            Some(stored) => {
                *stored = fighter.clone();
                Ok(())
            }
            None => Err(not_found(fighter.id())),
        }
    }

    async fn delete(&self, id: &FighterId) -> Result<(), DomainError> {
        self.fighters
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}

#[async_trait]
impl FighterRepository for InMemoryFighterRepository {
    async fn find_all(&self) -> Result<Vec<Fighter>, DomainError> {
        let mut fighters: Vec<Fighter> = self.fighters.read().await.values().cloned().collect();
        fighters.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(fighters)
    }
}

fn not_found(id: &FighterId) -> DomainError {
    DomainError::new(ErrorCode::FighterNotFound, format!("Fighter not found: {}", id))
        .with_detail("fighter_id", id.as_str())
}
