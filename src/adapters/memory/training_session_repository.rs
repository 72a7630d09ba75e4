//! In-memory training session repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, FighterId, Repository, TrainingSessionId};
use crate::domain::training::TrainingSession;
use crate::ports::TrainingSessionRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryTrainingSessionRepository {
    sessions: Arc<RwLock<HashMap<TrainingSessionId, TrainingSession>>>,
}

impl InMemoryTrainingSessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<TrainingSession, TrainingSessionId> for InMemoryTrainingSessionRepository {
    async fn find_by_id(
        &self,
        id: &TrainingSessionId,
    ) -> Result<Option<TrainingSession>, DomainError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn save(&self, session: &TrainingSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(session.id()) {
            return Err(DomainError::new(
                ErrorCode::DuplicateId,
                format!("Training session {} already exists", session.id()),
            ));
        }
        sessions.insert(session.id().clone(), session.clone());
        Ok(())
    }

    async fn update(&self, session: &TrainingSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(session.id()) {
            Some(stored) => {
                *stored = session.clone();
                Ok(())
            }
            None => Err(not_found(session.id())),
        }
    }

    async fn delete(&self, id: &TrainingSessionId) -> Result<(), DomainError> {
        self.sessions
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}

#[async_trait]
impl TrainingSessionRepository for InMemoryTrainingSessionRepository {
    async fn find_by_fighter(
        &self,
        fighter_id: &FighterId,
    ) -> Result<Vec<TrainingSession>, DomainError> {
        let mut found: Vec<TrainingSession> = self
            .sessions
            .read()
            .await
            .values()
            .filter(|s| s.fighter_id() == fighter_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| {
            a.scheduled_for()
                .cmp(b.scheduled_for())
                .then_with(|| a.id().cmp(b.id()))
        });
        Ok(found)
    }

    async fn delete_by_fighter(&self, fighter_id: &FighterId) -> Result<usize, DomainError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.fighter_id() != fighter_id);
        Ok(before - sessions.len())
    }
}

fn not_found(id: &TrainingSessionId) -> DomainError {
    DomainError::new(
        ErrorCode::TrainingSessionNotFound,
        format!("Training session not found: {}", id),
    )
}
