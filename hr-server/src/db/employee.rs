//! Employee Repository

use super::{RepoError, RepoResult, begin_write};
use shared::error::ErrorCode;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use sqlx::{SqliteConnection, SqlitePool};

const COLUMNS: &str = "id, last_name, name, patronymic, address, birth_date";

fn not_found(id: i64) -> RepoError {
    RepoError::NotFound(ErrorCode::EmployeeNotFound, format!("Employee {id} not found"))
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(&format!(
        "SELECT {COLUMNS} FROM FVA_employees WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<Employee> {
    let mut tx = begin_write(pool).await?;
    let employee = sqlx::query_as::<_, Employee>(&format!(
        "INSERT INTO FVA_employees (last_name, name, patronymic, address, birth_date) \
         VALUES (?, ?, ?, ?, ?) RETURNING {COLUMNS}"
    ))
    .bind(&data.last_name)
    .bind(&data.name)
    .bind(&data.patronymic)
    .bind(&data.address)
    .bind(data.birth_date)
    .fetch_one(&mut *tx)
    .await?;
    tx.commit().await?;
    Ok(employee)
}

pub async fn update(pool: &SqlitePool, id: i64, data: EmployeeUpdate) -> RepoResult<Employee> {
    let mut tx = begin_write(pool).await?;
    let employee = sqlx::query_as::<_, Employee>(&format!(
        "UPDATE FVA_employees SET \
         last_name = COALESCE(?1, last_name), \
         name = COALESCE(?2, name), \
         patronymic = COALESCE(?3, patronymic), \
         address = COALESCE(?4, address), \
         birth_date = COALESCE(?5, birth_date) \
         WHERE id = ?6 RETURNING {COLUMNS}"
    ))
    .bind(data.last_name)
    .bind(data.name)
    .bind(data.patronymic)
    .bind(data.address)
    .bind(data.birth_date)
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| not_found(id))?;
    tx.commit().await?;
    Ok(employee)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let mut tx = begin_write(pool).await?;
    if !exists(&mut *tx, id).await? {
        return Err(not_found(id));
    }

    let jobs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM FVA_jobs WHERE employee_id = ?")
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
    if jobs > 0 {
        return Err(RepoError::Conflict(
            ErrorCode::EmployeeHasJobs,
            format!("Employee {id} is referenced by {jobs} job(s)"),
        ));
    }

    sqlx::query("DELETE FROM FVA_employees WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(())
}

/// Existence check inside an open transaction
pub(crate) async fn exists(conn: &mut SqliteConnection, id: i64) -> RepoResult<bool> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM FVA_employees WHERE id = ?")
        .bind(id)
        .fetch_optional(conn)
        .await?;
    Ok(found.is_some())
}
