//! Position API Handlers

use axum::{Json, extract::State};
use serde::Deserialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Position, PositionCreate, PositionUpdate};

use crate::api::{DELETED, IdParams, Params};
use crate::db::position;
use crate::state::AppState;
use crate::validation;

#[derive(Debug, Deserialize)]
pub struct EditParams {
    pub id: i64,
    pub title: String,
}

/// GET /positions
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Position>>> {
    let positions = position::find_all(state.pool()).await?;
    Ok(Json(positions))
}

/// POST /position/add
pub async fn create(
    State(state): State<AppState>,
    Params(payload): Params<PositionCreate>,
) -> AppResult<Json<Position>> {
    let payload = PositionCreate::new(validation::title(&payload.title)?);
    let position = position::create(state.pool(), payload).await?;
    tracing::info!(position_id = position.id, "Position created");
    Ok(Json(position))
}

/// PUT /position/edit
pub async fn update(
    State(state): State<AppState>,
    Params(params): Params<EditParams>,
) -> AppResult<Json<Position>> {
    let payload = PositionUpdate {
        title: validation::title(&params.title)?,
    };
    let position = position::update(state.pool(), params.id, payload).await?;
    Ok(Json(position))
}

/// DELETE /position/delete
pub async fn delete(
    State(state): State<AppState>,
    Params(IdParams { id }): Params<IdParams>,
) -> AppResult<&'static str> {
    position::delete(state.pool(), id).await?;
    tracing::info!(position_id = id, "Position deleted");
    Ok(DELETED)
}

/// GET /position/get
pub async fn get_by_id(
    State(state): State<AppState>,
    Params(IdParams { id }): Params<IdParams>,
) -> AppResult<Json<Position>> {
    let position = position::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::PositionNotFound, format!("Position {id} not found"))
        })?;
    Ok(Json(position))
}
