//! In-memory analysis repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::analysis::Analysis;
use crate::domain::foundation::{AnalysisId, DomainError, ErrorCode, FighterId};
use crate::ports::AnalysisRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryAnalysisRepository {
    store: Arc<RwLock<AnalysisStore>>,
}

/// Analyses keyed by id, each tagged with its insertion order.
#[derive(Debug, Default)]
struct AnalysisStore {
    records: HashMap<AnalysisId, StoredAnalysis>,
    next_seq: u64,
}

#[derive(Debug, Clone)]
struct StoredAnalysis {
    seq: u64,
    analysis: Analysis,
}

impl InMemoryAnalysisRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Newest `created_at` first; ties go to the most recently stored.
fn newest_first(mut stored: Vec<StoredAnalysis>) -> Vec<Analysis> {
    stored.sort_by(|a, b| {
        b.analysis
            .created_at()
            .cmp(a.analysis.created_at())
            .then_with(|| b.seq.cmp(&a.seq))
    });
    stored.into_iter().map(|s| s.analysis).collect()
}

#[async_trait]
impl AnalysisRepository for InMemoryAnalysisRepository {
    async fn save(&self, analysis: &Analysis) -> Result<(), DomainError> {
        let mut store = self.store.write().await;
        if store.records.contains_key(analysis.id()) {
            return Err(DomainError::new(
                ErrorCode::DuplicateId,
                format!("Analysis {} already exists", analysis.id()),
            ));
        }
        let seq = store.next_seq;
        store.next_seq += 1;
        store.records.insert(
            analysis.id().clone(),
            StoredAnalysis {
                seq,
                analysis: analysis.clone(),
            },
        );
        Ok(())
    }

    async fn find_by_id(&self, id: &AnalysisId) -> Result<Option<Analysis>, DomainError> {
        Ok(self
            .store
            .read()
            .await
            .records
            .get(id)
            .map(|s| s.analysis.clone()))
    }

    async fn find_by_fighter(&self, fighter_id: &FighterId) -> Result<Vec<Analysis>, DomainError> {
        let found: Vec<StoredAnalysis> = self
            .store
            .read()
            .await
            .records
            .values()
            .filter(|s| s.analysis.fighter_id() == fighter_id)
            .cloned()
            .collect();
        Ok(newest_first(found))
    }

    async fn find_latest_by_fighter(
        &self,
        fighter_id: &FighterId,
    ) -> Result<Option<Analysis>, DomainError> {
        Ok(self.find_by_fighter(fighter_id).await?.into_iter().next())
    }

    async fn find_all(&self) -> Result<Vec<Analysis>, DomainError> {
        let all: Vec<StoredAnalysis> = self.store.read().await.records.values().cloned().collect();
        Ok(newest_first(all))
    }

    async fn delete_by_fighter(&self, fighter_id: &FighterId) -> Result<usize, DomainError> {
        let mut store = self.store.write().await;
        let before = store.records.len();
        store.records.retain(|_, s| s.analysis.fighter_id() != fighter_id);
        Ok(before - store.records.len())
    }
}
