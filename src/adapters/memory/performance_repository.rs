//! In-memory performance history repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, FighterId, PerformanceRecordId};
use crate::domain::performance::PerformanceRecord;
use crate::ports::PerformanceRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryPerformanceRepository {
    records: Arc<RwLock<HashMap<PerformanceRecordId, PerformanceRecord>>>,
}

impl InMemoryPerformanceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PerformanceRepository for InMemoryPerformanceRepository {
    async fn save(&self, record: &PerformanceRecord) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        if records.contains_key(record.id()) {
            return Err(DomainError::new(
                ErrorCode::DuplicateId,
                format!("Performance record {} already exists", record.id()),
            ));
        }
        records.insert(record.id().clone(), record.clone());
        Ok(())
    }

    async fn find_by_fighter(
        &self,
        fighter_id: &FighterId,
    ) -> Result<Vec<PerformanceRecord>, DomainError> {
        let mut found: Vec<PerformanceRecord> = self
            .records
            .read()
            .await
            .values()
            .filter(|r| r.fighter_id() == fighter_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| {
            a.fight_number()
                .cmp(&b.fight_number())
                .then_with(|| a.id().cmp(b.id()))
        });
        Ok(found)
    }

    async fn delete_by_fighter(&self, fighter_id: &FighterId) -> Result<usize, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, r| r.fighter_id() != fighter_id);
        Ok(before - records.len())
    }
}
