//! Employment API Handlers

use axum::{Json, extract::State};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Job, JobCreate, JobDismissal};

use crate::api::{IdParams, Params};
use crate::db::job;
use crate::state::AppState;

const DISMISSED: &str = "employee has been dismissed";

/// POST /employment
pub async fn employ(
    State(state): State<AppState>,
    Params(payload): Params<JobCreate>,
) -> AppResult<Json<Job>> {
    let job = job::employ(state.pool(), payload).await?;
    tracing::info!(
        job_id = job.id,
        employee_id = job.employee_id,
        division_id = job.division_id,
        "Employment created"
    );
    Ok(Json(job))
}

/// PUT /dismissal
pub async fn dismiss(
    State(state): State<AppState>,
    Params(payload): Params<JobDismissal>,
) -> AppResult<&'static str> {
    let job = job::dismiss(state.pool(), payload).await?;
    tracing::info!(job_id = job.id, employee_id = job.employee_id, "Employee dismissed");
    Ok(DISMISSED)
}

/// GET /job/get
pub async fn get_by_id(
    State(state): State<AppState>,
    Params(IdParams { id }): Params<IdParams>,
) -> AppResult<Json<Job>> {
    let job = job::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::with_message(ErrorCode::JobNotFound, format!("Job {id} not found")))?;
    Ok(Json(job))
}
