//! Division API Handlers

use axum::{Json, extract::State};
use serde::Deserialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Division, DivisionCreate, DivisionUpdate};

use crate::api::{DELETED, IdParams, Params};
use crate::db::division;
use crate::state::AppState;
use crate::validation;

#[derive(Debug, Deserialize)]
pub struct EditParams {
    pub id: i64,
    pub title: String,
}

/// GET /divisions
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Division>>> {
    let divisions = division::find_all(state.pool()).await?;
    Ok(Json(divisions))
}

/// POST /division/add
pub async fn create(
    State(state): State<AppState>,
    Params(payload): Params<DivisionCreate>,
) -> AppResult<Json<Division>> {
    let payload = DivisionCreate::new(validation::title(&payload.title)?);
    let division = division::create(state.pool(), payload).await?;
    tracing::info!(division_id = division.id, "Division created");
    Ok(Json(division))
}

/// PUT /division/edit
pub async fn update(
    State(state): State<AppState>,
    Params(params): Params<EditParams>,
) -> AppResult<Json<Division>> {
    let payload = DivisionUpdate {
        title: validation::title(&params.title)?,
    };
    let division = division::update(state.pool(), params.id, payload).await?;
    Ok(Json(division))
}

/// DELETE /division/delete
pub async fn delete(
    State(state): State<AppState>,
    Params(IdParams { id }): Params<IdParams>,
) -> AppResult<&'static str> {
    division::delete(state.pool(), id).await?;
    tracing::info!(division_id = id, "Division deleted");
    Ok(DELETED)
}

/// GET /division/get
pub async fn get_by_id(
    State(state): State<AppState>,
    Params(IdParams { id }): Params<IdParams>,
) -> AppResult<Json<Division>> {
    let division = division::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::DivisionNotFound, format!("Division {id} not found"))
        })?;
    Ok(Json(division))
}
