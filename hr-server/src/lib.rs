//! HR record service
//!
//! Employees, positions, divisions and the jobs linking them, stored in
//! SQLite (`FVA_` tables) and served over HTTP with axum.

pub mod api;
pub mod config;
pub mod db;
pub mod logger;
pub mod middleware;
pub mod state;
pub mod validation;

pub use api::{build_app, build_router};
pub use config::Config;
pub use db::DbService;
pub use state::AppState;
