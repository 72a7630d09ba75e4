//! Performance module - per-fight history and trend analysis.

mod errors;
mod record;
mod trend;

pub use errors::PerformanceError;
pub use record::{PerformanceDraft, PerformanceRecord};
pub use trend::{
    moving_average, PerformanceTrend, TrendAnalysis, MOVING_AVERAGE_WINDOW, RECENT_FIGHTS,
    TREND_THRESHOLD,
};
