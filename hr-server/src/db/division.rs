//! Division Repository

use super::{RepoError, RepoResult, begin_write};
use shared::error::ErrorCode;
use shared::models::{Division, DivisionCreate, DivisionUpdate};
use sqlx::{SqliteConnection, SqlitePool};

fn not_found(id: i64) -> RepoError {
    RepoError::NotFound(ErrorCode::DivisionNotFound, format!("Division {id} not found"))
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Division>> {
    let divisions =
        sqlx::query_as::<_, Division>("SELECT id, title FROM FVA_divisions ORDER BY id")
            .fetch_all(pool)
            .await?;
    Ok(divisions)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Division>> {
    let division =
        sqlx::query_as::<_, Division>("SELECT id, title FROM FVA_divisions WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(division)
}

pub async fn create(pool: &SqlitePool, data: DivisionCreate) -> RepoResult<Division> {
    let mut tx = begin_write(pool).await?;
    let division = sqlx::query_as::<_, Division>(
        "INSERT INTO FVA_divisions (title) VALUES (?) RETURNING id, title",
    )
    .bind(&data.title)
    .fetch_one(&mut *tx)
    .await?;
    tx.commit().await?;
    Ok(division)
}

pub async fn update(pool: &SqlitePool, id: i64, data: DivisionUpdate) -> RepoResult<Division> {
    let mut tx = begin_write(pool).await?;
    let division = sqlx::query_as::<_, Division>(
        "UPDATE FVA_divisions SET title = ? WHERE id = ? RETURNING id, title",
    )
    .bind(&data.title)
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| not_found(id))?;
    tx.commit().await?;
    Ok(division)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let mut tx = begin_write(pool).await?;
    if !exists(&mut *tx, id).await? {
        return Err(not_found(id));
    }

    let jobs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM FVA_jobs WHERE division_id = ?")
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
    if jobs > 0 {
        return Err(RepoError::Conflict(
            ErrorCode::DivisionInUse,
            format!("Division {id} is referenced by {jobs} job(s)"),
        ));
    }

    sqlx::query("DELETE FROM FVA_divisions WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(())
}

pub(crate) async fn exists(conn: &mut SqliteConnection, id: i64) -> RepoResult<bool> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM FVA_divisions WHERE id = ?")
        .bind(id)
        .fetch_optional(conn)
        .await?;
    Ok(found.is_some())
}
