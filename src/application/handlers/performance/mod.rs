//! Performance history command and query handlers.

mod get_performance_trend;
mod list_performance;
mod record_performance;

pub use get_performance_trend::{GetPerformanceTrendHandler, GetPerformanceTrendQuery};
pub use list_performance::{ListPerformanceHandler, ListPerformanceQuery};
pub use record_performance::{RecordPerformanceCommand, RecordPerformanceHandler};
