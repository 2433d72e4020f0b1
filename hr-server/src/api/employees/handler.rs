//! Employee API Handlers

use axum::{Json, extract::State};
use chrono::NaiveDate;
use serde::Deserialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Employee, EmployeeCreate, EmployeeFilter, EmployeeUpdate, Job};

use crate::api::{DELETED, IdParams, Params};
use crate::db::{employee, job, listing};
use crate::state::AppState;
use crate::validation;

/// Listing filters, kept as raw text so that empty values count as absent
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub division_id: Option<String>,
    pub employment_after_date: Option<String>,
}

impl ListParams {
    /// Resolve the filter; a division id shadows the date entirely
    pub fn filter(&self) -> AppResult<EmployeeFilter> {
        let division_id = non_empty(&self.division_id)
            .map(|raw| {
                raw.parse::<i64>().map_err(|_| {
                    AppError::with_message(
                        ErrorCode::InvalidFormat,
                        format!("division_id must be an integer, got '{raw}'"),
                    )
                    .with_detail("field", "division_id")
                })
            })
            .transpose()?;

        // the date is left unparsed when the division decides
        let employed_after = match division_id {
            Some(_) => None,
            None => non_empty(&self.employment_after_date)
                .map(|raw| {
                    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                        AppError::with_message(
                            ErrorCode::InvalidFormat,
                            format!("employment_after_date must be YYYY-MM-DD, got '{raw}'"),
                        )
                        .with_detail("field", "employment_after_date")
                    })
                })
                .transpose()?,
        };

        Ok(EmployeeFilter::from_parts(division_id, employed_after))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
pub struct EditParams {
    pub id: i64,
    pub last_name: String,
    pub name: Option<String>,
    pub patronymic: Option<String>,
    pub address: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

/// GET /employees - employees joined with their jobs
pub async fn list(
    State(state): State<AppState>,
    Params(params): Params<ListParams>,
) -> AppResult<Json<Vec<Employee>>> {
    let filter = params.filter()?;
    let employees = listing::list_employees(state.pool(), filter).await?;
    Ok(Json(employees))
}

/// POST /employee/add
pub async fn create(
    State(state): State<AppState>,
    Params(payload): Params<EmployeeCreate>,
) -> AppResult<Json<Employee>> {
    let payload = validation::employee_create(payload)?;
    let employee = employee::create(state.pool(), payload).await?;
    tracing::info!(employee_id = employee.id, "Employee created");
    Ok(Json(employee))
}

/// PUT /employee/edit
pub async fn update(
    State(state): State<AppState>,
    Params(params): Params<EditParams>,
) -> AppResult<Json<Employee>> {
    let payload = validation::employee_update(EmployeeUpdate {
        last_name: Some(params.last_name),
        name: params.name,
        patronymic: params.patronymic,
        address: params.address,
        birth_date: params.birth_date,
    })?;
    let employee = employee::update(state.pool(), params.id, payload).await?;
    Ok(Json(employee))
}

/// DELETE /employee/delete
pub async fn delete(
    State(state): State<AppState>,
    Params(IdParams { id }): Params<IdParams>,
) -> AppResult<&'static str> {
    employee::delete(state.pool(), id).await?;
    tracing::info!(employee_id = id, "Employee deleted");
    Ok(DELETED)
}

/// GET /employee/get
pub async fn get_by_id(
    State(state): State<AppState>,
    Params(IdParams { id }): Params<IdParams>,
) -> AppResult<Json<Employee>> {
    let employee = employee::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::EmployeeNotFound, format!("Employee {id} not found"))
        })?;
    Ok(Json(employee))
}

/// GET /employee/jobs - jobs of one employee
pub async fn list_jobs(
    State(state): State<AppState>,
    Params(IdParams { id }): Params<IdParams>,
) -> AppResult<Json<Vec<Job>>> {
    let jobs = job::find_by_employee(state.pool(), id).await?;
    Ok(Json(jobs))
}
