mod errors;
pub mod stats;


pub use errors::DashboardError;
pub use stats::{
    format_signed_percent, DashboardAggregator, DashboardStats, FighterHistory,
    DEFAULT_ACCURACY_LABEL,
};
