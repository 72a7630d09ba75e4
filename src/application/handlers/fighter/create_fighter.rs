//! CreateFighterHandler - Command handler for registering fighters.

use std::sync::Arc;

use crate::domain::fighter::{Fighter, FighterDraft, FighterError};
use crate::domain::foundation::{FighterId, Repository};
use crate::ports::FighterRepository;

/// Command to create a new fighter.
#[derive(Debug, Clone)]
pub struct CreateFighterCommand {
    pub draft: FighterDraft,
}

/// Handler for creating fighters.
pub struct CreateFighterHandler {
    repository: Arc<dyn FighterRepository>,
}

impl CreateFighterHandler {
    pub fn new(repository: Arc<dyn FighterRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateFighterCommand) -> Result<Fighter, FighterError> {
        let fighter = Fighter::new(FighterId::generate(), cmd.draft)?;
        self.repository.save(&fighter).await?;

        tracing::info!(
            fighter_id = %fighter.id(),
            style = fighter.fighting_style(),
            "Fighter created"
        );
        Ok(fighter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{draft, Repos};

    #[tokio::test]
    async fn creates_and_persists_fighter() {
        let repos = Repos::new();
        let handler = CreateFighterHandler::new(repos.fighters.clone());

        let fighter = handler
            .handle(CreateFighterCommand {
                draft: draft("Striker"),
            })
            .await
            .unwrap();

        let stored = repos.fighters.find_by_id(fighter.id()).await.unwrap();
        assert_eq!(stored, Some(fighter));
    }

    #[tokio::test]
    async fn each_fighter_gets_a_new_id() {
        let repos = Repos::new();
        let handler = CreateFighterHandler::new(repos.fighters.clone());

        let a = handler
            .handle(CreateFighterCommand { draft: draft("Mixed") })
            .await
            .unwrap();
        let b = handler
            .handle(CreateFighterCommand { draft: draft("Mixed") })
            .await
            .unwrap();

        assert_ne!(a.id(), b.id());
    }

    #[tokio::test]
    async fn rejects_invalid_record() {
        let repos = Repos::new();
        let handler = CreateFighterHandler::new(repos.fighters.clone());
        let mut bad = draft("Striker");
        bad.record = "fifteen wins".to_string();

        let err = handler
            .handle(CreateFighterCommand { draft: bad })
            .await
            .unwrap_err();

        assert!(matches!(err, FighterError::ValidationFailed { ref field, .. } if field == "record"));
        assert_eq!(repos.fighters.len().await, 0);
    }

    #[tokio::test]
    async fn rejects_out_of_range_age() {
        let repos = Repos::new();
        let handler = CreateFighterHandler::new(repos.fighters.clone());
        let mut bad = draft("Striker");
        bad.age = 9;

        let err = handler
            .handle(CreateFighterCommand { draft: bad })
            .await
            .unwrap_err();

        assert!(matches!(err, FighterError::ValidationFailed { ref field, .. } if field == "age"));
    }
}
