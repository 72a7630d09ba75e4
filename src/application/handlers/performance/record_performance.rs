//! RecordPerformanceHandler - Appends a fight to a fighter's history.

use std::sync::Arc;

use crate::domain::foundation::{PerformanceRecordId, Repository};
use crate::domain::performance::{PerformanceDraft, PerformanceError, PerformanceRecord};
use crate::ports::{FighterRepository, PerformanceRepository};

#[derive(Debug, Clone)]
pub struct RecordPerformanceCommand {
    pub draft: PerformanceDraft,
}

pub struct RecordPerformanceHandler {
    fighters: Arc<dyn FighterRepository>,
    performance: Arc<dyn PerformanceRepository>,
}

impl RecordPerformanceHandler {
    pub fn new(
        fighters: Arc<dyn FighterRepository>,
        performance: Arc<dyn PerformanceRepository>,
    ) -> Self {
        Self {
            fighters,
            performance,
        }
    }

    pub async fn handle(
        &self,
        cmd: RecordPerformanceCommand,
    ) -> Result<PerformanceRecord, PerformanceError> {
        let record = PerformanceRecord::new(PerformanceRecordId::generate(), cmd.draft)?;

        if !self.fighters.exists(record.fighter_id()).await? {
            tracing::warn!(fighter_id = %record.fighter_id(), "Performance for unknown fighter");
            return Err(PerformanceError::FighterNotFound(record.fighter_id().clone()));
        }

        self.performance.save(&record).await?;
        tracing::info!(
            fighter_id = %record.fighter_id(),
            fight_number = record.fight_number(),
            performance_score = record.performance_score(),
            "Performance recorded"
        );
        Ok(record)
    }
}
