//! Unified error system for the HR service
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ErrorBody`]: JSON body of error responses
//!
//! # Error Code Ranges
//!
//! - 0xxx: Request and general errors
//! - 1xxx: Employee errors
//! - 2xxx: Position errors
//! - 3xxx: Division errors
//! - 4xxx: Job errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorBody, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::EmployeeNotFound);
//!
//! let err = AppError::validation("name is too long")
//!     .with_detail("field", "name");
//!
//! let body = ErrorBody::from(&err);
//! assert_eq!(body.code, 2);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::ErrorCode;
pub use types::{AppError, AppResult, ErrorBody};
