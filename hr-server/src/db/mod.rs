//! Database Module
//!
//! Owns the SQLite connection pool, the schema bootstrap and the per-entity
//! repositories. Every write opens its own `BEGIN IMMEDIATE` transaction; a
//! transaction that is dropped before `commit` (handler cancelled, early `?`
//! return) rolls back.

pub mod division;
pub mod employee;
pub mod job;
pub mod listing;
pub mod position;
mod schema;

use std::str::FromStr;
use std::time::Duration;

use shared::error::{AppError, ErrorCode};
use sqlx::{Sqlite, SqlitePool, Transaction};
use sqlx::error::ErrorKind;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use thiserror::Error;

use crate::config::Config;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{1}")]
    NotFound(ErrorCode, String),

    #[error("{1}")]
    Conflict(ErrorCode, String),

    #[error("{1}")]
    Business(ErrorCode, String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => {
                RepoError::NotFound(ErrorCode::NotFound, "Record not found".into())
            }
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::ForeignKeyViolation => RepoError::Conflict(
                    ErrorCode::Conflict,
                    "Record is referenced by other records".into(),
                ),
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    RepoError::Validation(db_err.message().to_string())
                }
                _ => RepoError::Database(err.to_string()),
            },
            _ => RepoError::Database(err.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(code, msg)
            | RepoError::Conflict(code, msg)
            | RepoError::Business(code, msg) => AppError::with_message(code, msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => {
                tracing::error!(error = %msg, "Repository database error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Open a write transaction holding the SQLite write lock from the start
///
/// A deferred transaction that reads before writing cannot wait for the lock
/// when another connection commits in between: the upgrade fails with
/// SQLITE_BUSY regardless of the busy timeout. `BEGIN IMMEDIATE` takes the
/// lock up front, where the busy timeout applies.
pub(crate) async fn begin_write(pool: &SqlitePool) -> RepoResult<Transaction<'static, Sqlite>> {
    Ok(pool.begin_with("BEGIN IMMEDIATE").await?)
}

/// Database service, owner of the SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open the pool described by the configuration and bootstrap the schema
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        let in_memory = is_memory_url(&config.database_url);

        let mut options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(|e| AppError::config(format!("Invalid DATABASE_URL: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(config.db_acquire_timeout());
        if !in_memory {
            options = options
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal);
        }

        // Every connection to an in-memory URL is a separate database, so the
        // pool must hold exactly one connection for the schema to be shared.
        let mut pool_options = SqlitePoolOptions::new()
            .acquire_timeout(config.db_acquire_timeout());
        pool_options = if in_memory {
            pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            pool_options.max_connections(config.db_max_connections)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(
            in_memory,
            max_connections = config.db_max_connections,
            "Database connection established"
        );

        schema::ensure_schema(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create schema: {e}")))?;
        tracing::info!("Database schema ready");

        Ok(Self { pool })
    }

    /// Fresh in-memory database with the schema applied
    pub async fn in_memory() -> Result<Self, AppError> {
        Self::new(&Config::for_database("sqlite::memory:")).await
    }

    /// Cheap liveness probe used by the health endpoint
    pub async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
