//! Shared types for the HR record service
//!
//! Entity models and the unified error system used by the server and by
//! anything that talks to it over HTTP.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};
pub use models::{
    Division, DivisionCreate, DivisionUpdate, Employee, EmployeeCreate, EmployeeFilter,
    EmployeeUpdate, Job, JobCreate, JobDismissal, Position, PositionCreate, PositionUpdate,
};
