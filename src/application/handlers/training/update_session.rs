//! UpdateSessionHandler - Command handler for editing or completing sessions.

use std::sync::Arc;

use crate::domain::foundation::{Repository, TrainingSessionId};
use crate::domain::training::{TrainingError, TrainingSession, TrainingSessionPatch};
use crate::ports::TrainingSessionRepository;

#[derive(Debug, Clone)]
pub struct UpdateSessionCommand {
    pub session_id: TrainingSessionId,
    pub patch: TrainingSessionPatch,
}

pub struct UpdateSessionHandler {
    sessions: Arc<dyn TrainingSessionRepository>,
}

impl UpdateSessionHandler {
    pub fn new(sessions: Arc<dyn TrainingSessionRepository>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, cmd: UpdateSessionCommand) -> Result<TrainingSession, TrainingError> {
        let mut session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or_else(|| TrainingError::NotFound(cmd.session_id.clone()))?;

        session.apply(cmd.patch)?;
        self.sessions.update(&session).await?;

        tracing::info!(
            session_id = %session.id(),
            completed = session.is_completed(),
            "Training session updated"
        );
        Ok(session)
    }
}
