//! HTTP handlers for analysis endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::analysis::{
    GenerateAnalysisCommand, GetLatestAnalysisQuery, GetTrainingPlanQuery, ListAnalysesQuery,
    PredictPerformanceQuery,
};
use crate::domain::foundation::FighterId;

use super::dto::{AnalysisResponse, PredictionResponse, RecordAnalysisRequest, TrainingPlanResponse};

/// GET /api/fighters/:id/analyses
pub async fn list_analyses(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<AnalysisResponse>>, ApiError> {
    let query = ListAnalysesQuery {
        fighter_id: FighterId::new(id)?,
    };
    Ok(Json(state.list_analyses_handler().handle(query).await?))
}

/// GET /api/fighters/:id/analysis/latest
pub async fn latest_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let query = GetLatestAnalysisQuery {
        fighter_id: FighterId::new(id)?,
    };
    Ok(Json(state.latest_analysis_handler().handle(query).await?))
}

/// POST /api/analyses
pub async fn record_analysis(
    State(state): State<AppState>,
    Json(req): Json<RecordAnalysisRequest>,
) -> Result<(StatusCode, Json<AnalysisResponse>), ApiError> {
    let analysis = state.record_analysis_handler().handle(req.into()).await?;
    Ok((StatusCode::CREATED, Json(analysis)))
}

/// POST /api/fighters/:id/analyze
///
/// Runs the scoring heuristic and stores the result.
pub async fn analyze_fighter(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<AnalysisResponse>), ApiError> {
    let cmd = GenerateAnalysisCommand {
        fighter_id: FighterId::new(id)?,
    };
    let analysis = state.generate_analysis_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(analysis)))
}

/// GET /api/fighters/:id/prediction
pub async fn predict_performance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let query = PredictPerformanceQuery {
        fighter_id: FighterId::new(id)?,
    };
    Ok(Json(state.predict_performance_handler().handle(query).await?))
}

/// GET /api/fighters/:id/training/plan
pub async fn training_plan(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TrainingPlanResponse>, ApiError> {
    let query = GetTrainingPlanQuery {
        fighter_id: FighterId::new(id)?,
    };
    let plan = state.training_plan_handler().handle(query).await?;
    Ok(Json(plan.into()))
}
