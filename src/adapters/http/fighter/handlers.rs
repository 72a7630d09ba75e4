//! HTTP handlers for fighter endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::fighter::{
    CreateFighterCommand, DeleteFighterCommand, GetFighterQuery, UpdateFighterCommand,
};
use crate::domain::foundation::FighterId;

use super::dto::{CreateFighterRequest, FighterResponse, UpdateFighterRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/fighters
pub async fn list_fighters(
    State(state): State<AppState>,
) -> Result<Json<Vec<FighterResponse>>, ApiError> {
    let fighters = state.list_fighters_handler().handle().await?;
    Ok(Json(fighters))
}

/// GET /api/fighters/:id
pub async fn get_fighter(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FighterResponse>, ApiError> {
    let query = GetFighterQuery {
        fighter_id: FighterId::new(id)?,
    };
    let fighter = state.get_fighter_handler().handle(query).await?;
    Ok(Json(fighter))
}

/// POST /api/fighters
pub async fn create_fighter(
    State(state): State<AppState>,
    Json(req): Json<CreateFighterRequest>,
) -> Result<(StatusCode, Json<FighterResponse>), ApiError> {
    let fighter = state
        .create_fighter_handler()
        .handle(CreateFighterCommand { draft: req })
        .await?;
    Ok((StatusCode::CREATED, Json(fighter)))
}

/// PUT /api/fighters/:id
///
/// Partial update: absent fields keep their value.
pub async fn update_fighter(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateFighterRequest>,
) -> Result<Json<FighterResponse>, ApiError> {
    let cmd = UpdateFighterCommand {
        fighter_id: FighterId::new(id)?,
        patch: req,
    };
    let fighter = state.update_fighter_handler().handle(cmd).await?;
    Ok(Json(fighter))
}

/// DELETE /api/fighters/:id
///
/// Removes the fighter's analyses, sessions and performance history too.
pub async fn delete_fighter(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let cmd = DeleteFighterCommand {
        fighter_id: FighterId::new(id)?,
    };
    state.delete_fighter_handler().handle(cmd).await?;
    Ok(StatusCode::NO_CONTENT)
}
