//! Analysis repository port.
//!
//! Analyses are immutable once saved, so there is no update operation.
//! "Newest first" orders by `created_at` descending, with ties going to the
//! analysis stored most recently.

use async_trait::async_trait;

use crate::domain::analysis::Analysis;
use crate::domain::foundation::{AnalysisId, DomainError, FighterId};

/// Repository port for analysis snapshots.
#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    /// Save a new analysis.
    ///
    /// # Errors
    ///
    /// - `DuplicateId` if the id is already stored
    async fn save(&self, analysis: &Analysis) -> Result<(), DomainError>;

    /// Find an analysis by its ID.
    async fn find_by_id(&self, id: &AnalysisId) -> Result<Option<Analysis>, DomainError>;

    /// All analyses for a fighter, newest first.
    async fn find_by_fighter(&self, fighter_id: &FighterId) -> Result<Vec<Analysis>, DomainError>;

    /// The most recent analysis for a fighter; the head of `find_by_fighter`.
    async fn find_latest_by_fighter(
        &self,
        fighter_id: &FighterId,
    ) -> Result<Option<Analysis>, DomainError>;

    /// Every stored analysis, newest first.
    async fn find_all(&self) -> Result<Vec<Analysis>, DomainError>;

    /// Removes all analyses for a fighter, returning how many were removed.
    async fn delete_by_fighter(&self, fighter_id: &FighterId) -> Result<usize, DomainError>;
}
