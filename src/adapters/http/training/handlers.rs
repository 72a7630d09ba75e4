//! HTTP handlers for training session endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::training::{
    ListSessionsQuery, ScheduleSessionCommand, UpdateSessionCommand,
};
use crate::domain::foundation::{FighterId, TrainingSessionId};

use super::dto::{ScheduleSessionRequest, TrainingSessionResponse, UpdateSessionRequest};

/// GET /api/fighters/:id/training
pub async fn list_sessions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<TrainingSessionResponse>>, ApiError> {
    let query = ListSessionsQuery {
        fighter_id: FighterId::new(id)?,
    };
    Ok(Json(state.list_sessions_handler().handle(query).await?))
}

/// POST /api/training
pub async fn schedule_session(
    State(state): State<AppState>,
    Json(req): Json<ScheduleSessionRequest>,
) -> Result<(StatusCode, Json<TrainingSessionResponse>), ApiError> {
    let session = state
        .schedule_session_handler()
        .handle(ScheduleSessionCommand { draft: req })
        .await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// PUT /api/training/:id
pub async fn update_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateSessionRequest>,
) -> Result<Json<TrainingSessionResponse>, ApiError> {
    let cmd = UpdateSessionCommand {
        session_id: TrainingSessionId::new(id)?,
        patch: req,
    };
    Ok(Json(state.update_session_handler().handle(cmd).await?))
}
