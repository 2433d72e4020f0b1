//! HR data models
//!
//! Shared between the server and its clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod division;
pub mod employee;
pub mod job;
pub mod position;

// Re-exports
pub use division::*;
pub use employee::*;
pub use job::*;
pub use position::*;
