//! ListPerformanceHandler - Query handler for a fighter's fight history.

use std::sync::Arc;

use crate::domain::foundation::FighterId;
use crate::domain::performance::{PerformanceError, PerformanceRecord};
use crate::ports::PerformanceRepository;

#[derive(Debug, Clone)]
pub struct ListPerformanceQuery {
    pub fighter_id: FighterId,
}

pub struct ListPerformanceHandler {
    performance: Arc<dyn PerformanceRepository>,
}

impl ListPerformanceHandler {
    pub fn new(performance: Arc<dyn PerformanceRepository>) -> Self {
        Self { performance }
    }

    /// Ordered by fight number.
    pub async fn handle(
        &self,
        query: ListPerformanceQuery,
    ) -> Result<Vec<PerformanceRecord>, PerformanceError> {
        let records = self.performance.find_by_fighter(&query.fighter_id).await?;
        tracing::debug!(
            fighter_id = %query.fighter_id,
            count = records.len(),
            "Listed performance records"
        );
        Ok(records)
    }
}
