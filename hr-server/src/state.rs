//! Shared application state

use sqlx::SqlitePool;

use crate::db::DbService;

/// State handed to every handler
///
/// Cloning is cheap: the pool is reference counted. The pool is the only
/// shared resource, there is no in-process cache.
#[derive(Clone)]
pub struct AppState {
    pub db: DbService,
}

impl AppState {
    pub fn new(db: DbService) -> Self {
        Self { db }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }
}
