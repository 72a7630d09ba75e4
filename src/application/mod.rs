//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Fighter handlers
    fighter::{
        CreateFighterCommand, CreateFighterHandler, DeleteFighterCommand, DeleteFighterHandler,
        DeleteFighterResult, GetFighterHandler, GetFighterQuery, ListFightersHandler,
        UpdateFighterCommand, UpdateFighterHandler,
    },
    // Analysis handlers
    analysis::{
        GenerateAnalysisCommand, GenerateAnalysisHandler, GetLatestAnalysisHandler,
        GetLatestAnalysisQuery, GetTrainingPlanHandler, GetTrainingPlanQuery,
        ListAnalysesHandler, ListAnalysesQuery, PredictPerformanceHandler,
        PredictPerformanceQuery, RecordAnalysisCommand, RecordAnalysisHandler,
    },
    // Training handlers
    training::{
        ListSessionsHandler, ListSessionsQuery, ScheduleSessionCommand, ScheduleSessionHandler,
        UpdateSessionCommand, UpdateSessionHandler,
    },
    // Performance handlers
    performance::{
        GetPerformanceTrendHandler, GetPerformanceTrendQuery, ListPerformanceHandler,
        ListPerformanceQuery, RecordPerformanceCommand, RecordPerformanceHandler,
    },
    // Dashboard handlers
    dashboard::GetDashboardStatsHandler,
};
