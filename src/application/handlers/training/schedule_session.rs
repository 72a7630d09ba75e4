//! ScheduleSessionHandler - Command handler for booking training sessions.

use std::sync::Arc;

use crate::domain::foundation::{Repository, TrainingSessionId};
use crate::domain::training::{TrainingError, TrainingSession, TrainingSessionDraft};
use crate::ports::{FighterRepository, TrainingSessionRepository};

#[derive(Debug, Clone)]
pub struct ScheduleSessionCommand {
    pub draft: TrainingSessionDraft,
}

pub struct ScheduleSessionHandler {
    fighters: Arc<dyn FighterRepository>,
    sessions: Arc<dyn TrainingSessionRepository>,
}

impl ScheduleSessionHandler {
    pub fn new(
        fighters: Arc<dyn FighterRepository>,
        sessions: Arc<dyn TrainingSessionRepository>,
    ) -> Self {
        Self { fighters, sessions }
    }

    pub async fn handle(&self, cmd: ScheduleSessionCommand) -> Result<TrainingSession, TrainingError> {
        let session = TrainingSession::new(TrainingSessionId::generate(), cmd.draft)?;

        if !self.fighters.exists(session.fighter_id()).await? {
            tracing::warn!(fighter_id = %session.fighter_id(), "Session scheduled for unknown fighter");
            return Err(TrainingError::FighterNotFound(session.fighter_id().clone()));
        }

        self.sessions.save(&session).await?;
        tracing::info!(
            fighter_id = %session.fighter_id(),
            session_id = %session.id(),
            duration = session.duration(),
            "Training session scheduled"
        );
        Ok(session)
    }
}
