//! Employee listing
//!
//! Employees joined with their jobs, one row per matching job, ordered by
//! employment date (job id breaks ties).

use super::{RepoError, RepoResult};
use shared::error::ErrorCode;
use shared::models::{Employee, EmployeeFilter};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

pub async fn list_employees(pool: &SqlitePool, filter: EmployeeFilter) -> RepoResult<Vec<Employee>> {
    let mut conn = pool.acquire().await?;

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM FVA_employees")
        .fetch_one(&mut *conn)
        .await?;
    if total == 0 {
        return Err(RepoError::NotFound(
            ErrorCode::NoEmployees,
            "No employees recorded".into(),
        ));
    }

    let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(
        "SELECT e.id, e.last_name, e.name, e.patronymic, e.address, e.birth_date \
         FROM FVA_employees e JOIN FVA_jobs j ON j.employee_id = e.id",
    );
    match filter {
        EmployeeFilter::All => {}
        EmployeeFilter::Division(division_id) => {
            query.push(" WHERE j.division_id = ").push_bind(division_id);
        }
        EmployeeFilter::EmployedAfter(date) => {
            query.push(" WHERE j.date_of_employment > ").push_bind(date);
        }
    }
    query.push(" ORDER BY j.date_of_employment ASC, j.id ASC");

    let employees = query
        .build_query_as::<Employee>()
        .fetch_all(&mut *conn)
        .await?;
    tracing::debug!(?filter, count = employees.len(), "Employee listing");
    Ok(employees)
}
