//! GetPerformanceTrendHandler - Trend and moving average over fight history.

use std::sync::Arc;

use crate::domain::foundation::FighterId;
use crate::domain::performance::{PerformanceError, TrendAnalysis};
use crate::ports::PerformanceRepository;

#[derive(Debug, Clone)]
pub struct GetPerformanceTrendQuery {
    pub fighter_id: FighterId,
}

pub struct GetPerformanceTrendHandler {
    performance: Arc<dyn PerformanceRepository>,
}

impl GetPerformanceTrendHandler {
    pub fn new(performance: Arc<dyn PerformanceRepository>) -> Self {
        Self { performance }
    }

    /// A fighter with no history reports a stable trend over zero fights.
    pub async fn handle(
        &self,
        query: GetPerformanceTrendQuery,
    ) -> Result<TrendAnalysis, PerformanceError> {
        let records = self.performance.find_by_fighter(&query.fighter_id).await?;
        Ok(TrendAnalysis::from_records(&records))
    }
}
