//! Dashboard query handlers.

mod get_dashboard_stats;

pub use get_dashboard_stats::GetDashboardStatsHandler;
