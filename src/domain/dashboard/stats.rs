//! Dashboard headline statistics.
//!
//! `avgImprovement` is computed from analysis history. `aiAccuracy` has no
//! ground truth to measure against and stays a configured label.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::Analysis;
use crate::domain::foundation::FighterId;

/// Label shown for accuracy when nothing else is configured.
pub const DEFAULT_ACCURACY_LABEL: &str = "94.2%";

/// One fighter together with every analysis recorded for them.
///
/// `analyses` is expected newest first, as the analysis repository returns
/// them. Only the order of equal `created_at` values is relied upon; those
/// are taken to be most recently stored first.
#[derive(Debug, Clone)]
pub struct FighterHistory {
    pub fighter_id: FighterId,
    pub analyses: Vec<Analysis>,
}

impl FighterHistory {
    pub fn new(fighter_id: FighterId, analyses: Vec<Analysis>) -> Self {
        Self {
            fighter_id,
            analyses,
        }
    }

    /// Percentage change of overall score from the earliest to the latest
    /// analysis. `None` with fewer than two analyses or a zero baseline.
    pub fn improvement_percent(&self) -> Option<f64> {
        if self.analyses.len() < 2 {
            return None;
        }

        // Stable sort keeps the stored order for equal timestamps.
        let mut ordered: Vec<&Analysis> = self.analyses.iter().collect();
        ordered.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        let latest = ordered.first()?;
        let earliest = ordered.last()?;

        let baseline = f64::from(earliest.overall_score());
        if baseline == 0.0 {
            return None;
        }
        Some((f64::from(latest.overall_score()) - baseline) / baseline * 100.0)
    }
}

/// Headline metrics for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub active_fighters: usize,
    pub completed_analyses: usize,
    pub avg_improvement: String,
    pub ai_accuracy: String,
}

pub struct DashboardAggregator;

impl DashboardAggregator {
    /// Summarizes every fighter's history.
    ///
    /// An empty collection yields zero counters and `"+0%"` improvement.
    pub fn aggregate(histories: &[FighterHistory], accuracy_label: &str) -> DashboardStats {
        let completed_analyses = histories.iter().map(|h| h.analyses.len()).sum();

        DashboardStats {
            active_fighters: histories.len(),
            completed_analyses,
            avg_improvement: format_signed_percent(Self::average_improvement(histories)),
            ai_accuracy: accuracy_label.to_string(),
        }
    }

    /// Mean improvement across fighters with at least two analyses.
    pub fn average_improvement(histories: &[FighterHistory]) -> Option<f64> {
        let improvements: Vec<f64> = histories
            .iter()
            .filter_map(FighterHistory::improvement_percent)
            .collect();

        if improvements.is_empty() {
            return None;
        }
        Some(improvements.iter().sum::<f64>() / improvements.len() as f64)
    }
}

/// Renders a percentage rounded to an integer with an explicit sign.
pub fn format_signed_percent(value: Option<f64>) -> String {
    let rounded = value.map(f64::round).unwrap_or(0.0) as i64;
    if rounded < 0 {
        format!("{}%", rounded)
    } else {
        format!("+{}%", rounded)
    }
}
