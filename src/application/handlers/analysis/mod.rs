//! Analysis command and query handlers.

mod generate_analysis;
mod get_latest_analysis;
mod get_training_plan;
mod list_analyses;
mod predict_performance;
mod record_analysis;

pub use generate_analysis::{GenerateAnalysisCommand, GenerateAnalysisHandler};
pub use get_latest_analysis::{GetLatestAnalysisHandler, GetLatestAnalysisQuery};
pub use get_training_plan::{GetTrainingPlanHandler, GetTrainingPlanQuery};
pub use list_analyses::{ListAnalysesHandler, ListAnalysesQuery};
pub use predict_performance::{PredictPerformanceHandler, PredictPerformanceQuery};
pub use record_analysis::{RecordAnalysisCommand, RecordAnalysisHandler};
