//! Fighter repository port.
//!
//! Fighters are the root of every other record. Implementations only store
//! fighters; cascading deletes are coordinated by the application layer.

use async_trait::async_trait;

use crate::domain::fighter::Fighter;
use crate::domain::foundation::{DomainError, FighterId, Repository};

/// Repository port for fighter persistence.
///
/// CRUD comes from `Repository`; this adds listing.
#[async_trait]
pub trait FighterRepository: Repository<Fighter, FighterId> {
    /// Returns every stored fighter ordered by id.
    async fn find_all(&self) -> Result<Vec<Fighter>, DomainError>;
}
