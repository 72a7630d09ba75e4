//! UpdateFighterHandler - Command handler for partial fighter updates.

use std::sync::Arc;

use crate::domain::fighter::{Fighter, FighterError, FighterPatch};
use crate::domain::foundation::{FighterId, Repository};
use crate::ports::FighterRepository;

/// Command to merge a patch into an existing fighter.
#[derive(Debug, Clone)]
pub struct UpdateFighterCommand {
    pub fighter_id: FighterId,
    pub patch: FighterPatch,
}

pub struct UpdateFighterHandler {
    repository: Arc<dyn FighterRepository>,
}

impl UpdateFighterHandler {
    pub fn new(repository: Arc<dyn FighterRepository>) -> Self {
        Self { repository }
    }

    /// Applies the patch and persists the result.
    ///
    /// An empty patch returns the fighter unchanged without writing.
    pub async fn handle(&self, cmd: UpdateFighterCommand) -> Result<Fighter, FighterError> {
        let mut fighter = self
            .repository
            .find_by_id(&cmd.fighter_id)
            .await?
            .ok_or_else(|| FighterError::NotFound(cmd.fighter_id.clone()))?;

        if cmd.patch.is_empty() {
            return Ok(fighter);
        }

        fighter.apply(cmd.patch)?;
        self.repository.update(&fighter).await?;

        tracing::info!(fighter_id = %fighter.id(), "Fighter updated");
        Ok(fighter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{fighter_id, Repos};
    use crate::domain::fighter::FightingStyle;

    #[tokio::test]
    async fn merges_patch_and_persists() {
        let repos = Repos::new();
        repos.add_fighter("1", "Striker").await;
        let handler = UpdateFighterHandler::new(repos.fighters.clone());

        let updated = handler
            .handle(UpdateFighterCommand {
                fighter_id: fighter_id("1"),
                patch: FighterPatch {
                    fighting_style: Some("Wrestler".to_string()),
                    record: Some("16-3-0".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.style(), FightingStyle::Wrestler);
        assert_eq!(updated.record().wins(), 16);
        assert_eq!(updated.name(), "Dana Reyes");

        let stored = repos.fighters.find_by_id(&fighter_id("1")).await.unwrap();
        assert_eq!(stored, Some(updated));
    }

    #[tokio::test]
    async fn invalid_patch_leaves_stored_fighter_untouched() {
        let repos = Repos::new();
        let original = repos.add_fighter("1", "Striker").await;
        let handler = UpdateFighterHandler::new(repos.fighters.clone());

        let err = handler
            .handle(UpdateFighterCommand {
                fighter_id: fighter_id("1"),
                patch: FighterPatch {
                    name: Some("New Name".to_string()),
                    weight: Some(-5.0),
                    ..Default::default()
                },
            })
            .await
            .unwrap_err();

        assert!(matches!(err, FighterError::ValidationFailed { .. }));
        let stored = repos.fighters.find_by_id(&fighter_id("1")).await.unwrap();
        assert_eq!(stored, Some(original));
    }

    #[tokio::test]
    async fn empty_patch_returns_current_fighter() {
        let repos = Repos::new();
        let original = repos.add_fighter("1", "Mixed").await;
        let handler = UpdateFighterHandler::new(repos.fighters.clone());

        let result = handler
            .handle(UpdateFighterCommand {
                fighter_id: fighter_id("1"),
                patch: FighterPatch::default(),
            })
            .await
            .unwrap();

        assert_eq!(result, original);
    }

    #[tokio::test]
    async fn missing_fighter_is_not_found() {
        let repos = Repos::new();
        let handler = UpdateFighterHandler::new(repos.fighters.clone());

        let err = handler
            .handle(UpdateFighterCommand {
                fighter_id: fighter_id("ghost"),
                patch: FighterPatch {
                    age: Some(30),
                    ..Default::default()
                },
            })
            .await
            .unwrap_err();

        assert_eq!(err, FighterError::NotFound(fighter_id("ghost")));
    }
}
