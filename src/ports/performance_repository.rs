//! Performance history repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, FighterId};
use crate::domain::performance::PerformanceRecord;

/// Repository port for per-fight performance records.
///
/// Records are append-only.
#[async_trait]
pub trait PerformanceRepository: Send + Sync {
    /// Save a new record.
    ///
    /// # Errors
    ///
    /// - `DuplicateId` if the id is already stored
    async fn save(&self, record: &PerformanceRecord) -> Result<(), DomainError>;

    /// Records for a fighter ordered by fight number ascending.
    async fn find_by_fighter(
        &self,
        fighter_id: &FighterId,
    ) -> Result<Vec<PerformanceRecord>, DomainError>;

    /// Removes all records for a fighter, returning how many were removed.
    async fn delete_by_fighter(&self, fighter_id: &FighterId) -> Result<usize, DomainError>;
}
