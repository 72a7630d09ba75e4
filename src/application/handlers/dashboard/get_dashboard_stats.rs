//! GetDashboardStatsHandler - Query handler for headline dashboard metrics.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::analysis::Analysis;
use crate::domain::dashboard::{DashboardAggregator, DashboardError, DashboardStats, FighterHistory};
use crate::domain::foundation::FighterId;
use crate::ports::{AnalysisRepository, FighterRepository};

/// Handler for dashboard statistics.
///
/// Reads every fighter and every analysis, groups the analyses by fighter
/// and hands the result to [`DashboardAggregator`]. Analyses whose fighter
/// no longer exists are ignored.
pub struct GetDashboardStatsHandler {
    fighters: Arc<dyn FighterRepository>,
    analyses: Arc<dyn AnalysisRepository>,
    accuracy_label: String,
}

impl GetDashboardStatsHandler {
    pub fn new(
        fighters: Arc<dyn FighterRepository>,
        analyses: Arc<dyn AnalysisRepository>,
        accuracy_label: impl Into<String>,
    ) -> Self {
        Self {
            fighters,
            analyses,
            accuracy_label: accuracy_label.into(),
        }
    }

    pub async fn handle(&self) -> Result<DashboardStats, DashboardError> {
        let fighters = self.fighters.find_all().await?;
        let mut by_fighter: HashMap<FighterId, Vec<Analysis>> = HashMap::new();
        for analysis in self.analyses.find_all().await? {
            by_fighter
                .entry(analysis.fighter_id().clone())
                .or_default()
                .push(analysis);
        }

        let histories: Vec<FighterHistory> = fighters
            .into_iter()
            .map(|fighter| {
                let analyses = by_fighter.remove(fighter.id()).unwrap_or_default();
                FighterHistory::new(fighter.id().clone(), analyses)
            })
            .collect();

        let stats = DashboardAggregator::aggregate(&histories, &self.accuracy_label);
        tracing::debug!(
            active_fighters = stats.active_fighters,
            completed_analyses = stats.completed_analyses,
            "Dashboard stats computed"
        );
        Ok(stats)
    }
}
