//! Shared state handed to every route.

use std::sync::Arc;

use crate::application::handlers::analysis::{
    GenerateAnalysisHandler, GetLatestAnalysisHandler, GetTrainingPlanHandler, ListAnalysesHandler,
    PredictPerformanceHandler, RecordAnalysisHandler,
};
use crate::application::handlers::dashboard::GetDashboardStatsHandler;
use crate::application::handlers::fighter::{
    CreateFighterHandler, DeleteFighterHandler, GetFighterHandler, ListFightersHandler,
    UpdateFighterHandler,
};
use crate::application::handlers::performance::{
    GetPerformanceTrendHandler, ListPerformanceHandler, RecordPerformanceHandler,
};
use crate::application::handlers::training::{
    ListSessionsHandler, ScheduleSessionHandler, UpdateSessionHandler,
};
use crate::ports::{
    AnalysisRepository, FighterRepository, PerformanceRepository, RandomSource,
    TrainingSessionRepository,
};

/// Ports plus the few settings request handlers need.
///
/// Cheap to clone; every field is shared.
#[derive(Clone)]
pub struct AppState {
    pub fighters: Arc<dyn FighterRepository>,
    pub analyses: Arc<dyn AnalysisRepository>,
    pub training: Arc<dyn TrainingSessionRepository>,
    pub performance: Arc<dyn PerformanceRepository>,
    pub rng: Arc<dyn RandomSource>,
    pub accuracy_label: Arc<str>,
}

impl AppState {
    pub fn new(
        fighters: Arc<dyn FighterRepository>,
        analyses: Arc<dyn AnalysisRepository>,
        training: Arc<dyn TrainingSessionRepository>,
        performance: Arc<dyn PerformanceRepository>,
        rng: Arc<dyn RandomSource>,
        accuracy_label: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            fighters,
            analyses,
            training,
            performance,
            rng,
            accuracy_label: accuracy_label.into(),
        }
    }

    // Fighter

    pub fn create_fighter_handler(&self) -> CreateFighterHandler {
        CreateFighterHandler::new(self.fighters.clone())
    }

    pub fn get_fighter_handler(&self) -> GetFighterHandler {
        GetFighterHandler::new(self.fighters.clone())
    }

    pub fn list_fighters_handler(&self) -> ListFightersHandler {
        ListFightersHandler::new(self.fighters.clone())
    }

    pub fn update_fighter_handler(&self) -> UpdateFighterHandler {
        UpdateFighterHandler::new(self.fighters.clone())
    }

    pub fn delete_fighter_handler(&self) -> DeleteFighterHandler {
        DeleteFighterHandler::new(
            self.fighters.clone(),
            self.analyses.clone(),
            self.training.clone(),
            self.performance.clone(),
        )
    }

    // Analysis

    pub fn generate_analysis_handler(&self) -> GenerateAnalysisHandler {
        GenerateAnalysisHandler::new(self.fighters.clone(), self.analyses.clone(), self.rng.clone())
    }

    pub fn record_analysis_handler(&self) -> RecordAnalysisHandler {
        RecordAnalysisHandler::new(self.fighters.clone(), self.analyses.clone())
    }

    pub fn list_analyses_handler(&self) -> ListAnalysesHandler {
        ListAnalysesHandler::new(self.analyses.clone())
    }

    pub fn latest_analysis_handler(&self) -> GetLatestAnalysisHandler {
        GetLatestAnalysisHandler::new(self.analyses.clone())
    }

    pub fn predict_performance_handler(&self) -> PredictPerformanceHandler {
        PredictPerformanceHandler::new(self.fighters.clone(), self.rng.clone())
    }

    pub fn training_plan_handler(&self) -> GetTrainingPlanHandler {
        GetTrainingPlanHandler::new(self.fighters.clone(), self.analyses.clone())
    }

    // Training

    pub fn schedule_session_handler(&self) -> ScheduleSessionHandler {
        ScheduleSessionHandler::new(self.fighters.clone(), self.training.clone())
    }

    pub fn update_session_handler(&self) -> UpdateSessionHandler {
        UpdateSessionHandler::new(self.training.clone())
    }

    pub fn list_sessions_handler(&self) -> ListSessionsHandler {
        ListSessionsHandler::new(self.training.clone())
    }

    // Performance

    pub fn record_performance_handler(&self) -> RecordPerformanceHandler {
        RecordPerformanceHandler::new(self.fighters.clone(), self.performance.clone())
    }

    pub fn list_performance_handler(&self) -> ListPerformanceHandler {
        ListPerformanceHandler::new(self.performance.clone())
    }

    pub fn performance_trend_handler(&self) -> GetPerformanceTrendHandler {
        GetPerformanceTrendHandler::new(self.performance.clone())
    }

    // Dashboard

    pub fn dashboard_stats_handler(&self) -> GetDashboardStatsHandler {
        GetDashboardStatsHandler::new(
            self.fighters.clone(),
            self.analyses.clone(),
            &*self.accuracy_label,
        )
    }
}
