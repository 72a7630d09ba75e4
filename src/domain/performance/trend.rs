//! Performance trend over a fighter's fight history.

use serde::{Deserialize, Serialize};

use super::PerformanceRecord;

/// Number of most recent fights compared against the rest.
pub const RECENT_FIGHTS: usize = 3;

/// Mean score difference beyond which a trend is no longer stable.
pub const TREND_THRESHOLD: f64 = 5.0;

/// Default trailing window for the moving average.
pub const MOVING_AVERAGE_WINDOW: usize = 3;

/// Direction of a fighter's recent performances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceTrend {
    Improving,
    Declining,
    Stable,
}

impl PerformanceTrend {
    /// Compares the mean of the last `RECENT_FIGHTS` scores with the mean of
    /// everything before them. Too little history is `Stable`.
    pub fn from_scores(scores: &[f64]) -> Self {
        if scores.len() < 2 {
            return PerformanceTrend::Stable;
        }

        let split = scores.len().saturating_sub(RECENT_FIGHTS);
        let (earlier, recent) = scores.split_at(split);
        if earlier.is_empty() || recent.is_empty() {
            return PerformanceTrend::Stable;
        }

        let difference = mean(recent) - mean(earlier);
        if difference > TREND_THRESHOLD {
            PerformanceTrend::Improving
        } else if difference < -TREND_THRESHOLD {
            PerformanceTrend::Declining
        } else {
            PerformanceTrend::Stable
        }
    }
}

/// Trend summary for the performance endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendAnalysis {
    pub trend: PerformanceTrend,
    pub fights: usize,
    pub moving_average: Vec<f64>,
}

impl TrendAnalysis {
    /// Analyzes records in fight-number order regardless of input order.
    pub fn from_records(records: &[PerformanceRecord]) -> Self {
        let mut ordered: Vec<&PerformanceRecord> = records.iter().collect();
        ordered.sort_by_key(|r| r.fight_number());
        let scores: Vec<f64> = ordered.iter().map(|r| r.performance_score()).collect();

        Self {
            trend: PerformanceTrend::from_scores(&scores),
            fights: scores.len(),
            moving_average: moving_average(&scores, MOVING_AVERAGE_WINDOW),
        }
    }
}

/// Trailing moving average rounded to two decimals.
///
/// Early points average over however many values are available.
/// A zero window is treated as a window of one.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let avg = mean(&values[start..=i]);
            (avg * 100.0).round() / 100.0
        })
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
