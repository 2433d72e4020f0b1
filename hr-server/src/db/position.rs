//! Position Repository

use super::{RepoError, RepoResult, begin_write};
use shared::error::ErrorCode;
use shared::models::{Position, PositionCreate, PositionUpdate};
use sqlx::{SqliteConnection, SqlitePool};

fn not_found(id: i64) -> RepoError {
    RepoError::NotFound(ErrorCode::PositionNotFound, format!("Position {id} not found"))
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Position>> {
    let positions =
        sqlx::query_as::<_, Position>("SELECT id, title FROM FVA_positions ORDER BY id")
            .fetch_all(pool)
            .await?;
    Ok(positions)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Position>> {
    let position =
        sqlx::query_as::<_, Position>("SELECT id, title FROM FVA_positions WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(position)
}

pub async fn create(pool: &SqlitePool, data: PositionCreate) -> RepoResult<Position> {
    let mut tx = begin_write(pool).await?;
    let position = sqlx::query_as::<_, Position>(
        "INSERT INTO FVA_positions (title) VALUES (?) RETURNING id, title",
    )
    .bind(&data.title)
    .fetch_one(&mut *tx)
    .await?;
    tx.commit().await?;
    Ok(position)
}

pub async fn update(pool: &SqlitePool, id: i64, data: PositionUpdate) -> RepoResult<Position> {
    let mut tx = begin_write(pool).await?;
    let position = sqlx::query_as::<_, Position>(
        "UPDATE FVA_positions SET title = ? WHERE id = ? RETURNING id, title",
    )
    .bind(&data.title)
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| not_found(id))?;
    tx.commit().await?;
    Ok(position)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let mut tx = begin_write(pool).await?;
    if !exists(&mut *tx, id).await? {
        return Err(not_found(id));
    }

    let jobs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM FVA_jobs WHERE position_id = ?")
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
    if jobs > 0 {
        return Err(RepoError::Conflict(
            ErrorCode::PositionInUse,
            format!("Position {id} is referenced by {jobs} job(s)"),
        ));
    }

    sqlx::query("DELETE FROM FVA_positions WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(())
}

pub(crate) async fn exists(conn: &mut SqliteConnection, id: i64) -> RepoResult<bool> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM FVA_positions WHERE id = ?")
        .bind(id)
        .fetch_optional(conn)
        .await?;
    Ok(found.is_some())
}
