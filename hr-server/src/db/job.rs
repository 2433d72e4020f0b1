//! Job Repository
//!
//! Employment creates a job row; dismissal is the only mutation afterwards.

use super::{RepoError, RepoResult, begin_write, division, employee, position};
use shared::error::ErrorCode;
use chrono::NaiveDate;
use shared::models::{Job, JobCreate, JobDismissal};
use sqlx::SqlitePool;

const COLUMNS: &str =
    "id, employee_id, position_id, division_id, date_of_employment, date_of_dismissal";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Job>> {
    let job = sqlx::query_as::<_, Job>(&format!("SELECT {COLUMNS} FROM FVA_jobs WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(job)
}

/// Jobs of one employee, oldest employment first
pub async fn find_by_employee(pool: &SqlitePool, employee_id: i64) -> RepoResult<Vec<Job>> {
    let mut conn = pool.acquire().await?;
    if !employee::exists(&mut *conn, employee_id).await? {
        return Err(RepoError::NotFound(
            ErrorCode::EmployeeNotFound,
            format!("Employee {employee_id} not found"),
        ));
    }
    let jobs = sqlx::query_as::<_, Job>(&format!(
        "SELECT {COLUMNS} FROM FVA_jobs WHERE employee_id = ? \
         ORDER BY date_of_employment, id"
    ))
    .bind(employee_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(jobs)
}

/// Record an employment; all three referenced rows must exist
pub async fn employ(pool: &SqlitePool, data: JobCreate) -> RepoResult<Job> {
    let mut tx = begin_write(pool).await?;

    if !employee::exists(&mut *tx, data.employee_id).await? {
        return Err(RepoError::NotFound(
            ErrorCode::EmployeeNotFound,
            format!("Employee {} not found", data.employee_id),
        ));
    }
    if !position::exists(&mut *tx, data.position_id).await? {
        return Err(RepoError::NotFound(
            ErrorCode::PositionNotFound,
            format!("Position {} not found", data.position_id),
        ));
    }
    if !division::exists(&mut *tx, data.division_id).await? {
        return Err(RepoError::NotFound(
            ErrorCode::DivisionNotFound,
            format!("Division {} not found", data.division_id),
        ));
    }

    let job = sqlx::query_as::<_, Job>(&format!(
        "INSERT INTO FVA_jobs (employee_id, position_id, division_id, date_of_employment) \
         VALUES (?, ?, ?, ?) RETURNING {COLUMNS}"
    ))
    .bind(data.employee_id)
    .bind(data.position_id)
    .bind(data.division_id)
    .bind(data.date_of_employment)
    .fetch_one(&mut *tx)
    .await?;
    tx.commit().await?;

    tracing::debug!(job_id = job.id, employee_id = job.employee_id, "Employment recorded");
    Ok(job)
}

/// Set the dismissal date on the employee's job
pub async fn dismiss(pool: &SqlitePool, data: JobDismissal) -> RepoResult<Job> {
    let mut tx = begin_write(pool).await?;

    if !employee::exists(&mut *tx, data.employee_id).await? {
        return Err(RepoError::NotFound(
            ErrorCode::EmployeeNotFound,
            format!("Employee {} not found", data.employee_id),
        ));
    }

    let jobs = sqlx::query_as::<_, Job>(&format!(
        "SELECT {COLUMNS} FROM FVA_jobs WHERE employee_id = ? \
         ORDER BY date_of_employment, id"
    ))
    .bind(data.employee_id)
    .fetch_all(&mut *tx)
    .await?;

    let target = dismissal_target(data.employee_id, &jobs, data.date_of_dismissal)?;
    if data.date_of_dismissal < target.date_of_employment {
        return Err(RepoError::Business(
            ErrorCode::DismissalBeforeEmployment,
            format!(
                "Dismissal date {} precedes employment date {}",
                data.date_of_dismissal, target.date_of_employment
            ),
        ));
    }

    let job = sqlx::query_as::<_, Job>(&format!(
        "UPDATE FVA_jobs SET date_of_dismissal = ? WHERE id = ? RETURNING {COLUMNS}"
    ))
    .bind(data.date_of_dismissal)
    .bind(target.id)
    .fetch_one(&mut *tx)
    .await?;
    tx.commit().await?;

    tracing::debug!(job_id = job.id, employee_id = job.employee_id, "Employee dismissed");
    Ok(job)
}

/// Pick the job a dismissal applies to
///
/// The single open job wins. With no open job, the latest job is picked
/// again when it is the only one or already carries the requested date, so
/// a repeated dismissal succeeds. `jobs` is ordered oldest employment first.
fn dismissal_target(employee_id: i64, jobs: &[Job], date: NaiveDate) -> RepoResult<&Job> {
    let mut open = jobs.iter().filter(|job| job.is_open());
    match (open.next(), open.next()) {
        (Some(job), None) => Ok(job),
        (Some(_), Some(_)) => Err(RepoError::Conflict(
            ErrorCode::DismissalAmbiguous,
            format!("Employee {employee_id} has several open jobs"),
        )),
        (None, _) => match jobs {
            [] => Err(RepoError::NotFound(
                ErrorCode::JobNotFound,
                format!("Employee {employee_id} has no job"),
            )),
            [only] => Ok(only),
            [.., latest] if latest.date_of_dismissal == Some(date) => Ok(latest),
            _ => Err(RepoError::Conflict(
                ErrorCode::DismissalAmbiguous,
                format!("Employee {employee_id} has no open job among {} jobs", jobs.len()),
            )),
        },
    }
}
