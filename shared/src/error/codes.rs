//! Error codes of the HR service
//!
//! Codes are grouped by range:
//! - 0xxx: request and general errors
//! - 1xxx: employee
//! - 2xxx: position
//! - 3xxx: division
//! - 4xxx: job (employment record)
//! - 9xxx: system

use std::fmt;

/// Stable numeric error code, returned as `code` in every error body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // 0xxx
    ValidationFailed = 2,
    NotFound = 3,
    /// Referential-integrity conflict reported by the store
    Conflict = 4,
    /// Missing or undecodable parameter
    InvalidRequest = 5,
    /// Unparsable integer or date
    InvalidFormat = 6,
    RequiredField = 7,
    /// Text longer than the column allows
    ValueTooLong = 8,

    // 1xxx
    EmployeeNotFound = 1001,
    /// Delete refused, the employee still has jobs
    EmployeeHasJobs = 1002,
    /// Listing requested while no employee is recorded
    NoEmployees = 1003,

    // 2xxx
    PositionNotFound = 2001,
    PositionInUse = 2002,

    // 3xxx
    DivisionNotFound = 3001,
    DivisionInUse = 3002,

    // 4xxx
    JobNotFound = 4001,
    /// No single job can be picked for a dismissal
    DismissalAmbiguous = 4002,
    DismissalBeforeEmployment = 4003,

    // 9xxx
    InternalError = 9001,
    DatabaseError = 9002,
    ConfigError = 9003,
}

impl ErrorCode {
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Default message, used when no specific one is given
    pub const fn message(self) -> &'static str {
        match self {
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Record not found",
            Self::Conflict => "Record is referenced by other records",
            Self::InvalidRequest => "Invalid request parameters",
            Self::InvalidFormat => "Invalid value format",
            Self::RequiredField => "Required field is missing",
            Self::ValueTooLong => "Value is too long",

            Self::EmployeeNotFound => "Employee not found",
            Self::EmployeeHasJobs => "Employee is referenced by jobs",
            Self::NoEmployees => "No employees recorded",

            Self::PositionNotFound => "Position not found",
            Self::PositionInUse => "Position is referenced by jobs",

            Self::DivisionNotFound => "Division not found",
            Self::DivisionInUse => "Division is referenced by jobs",

            Self::JobNotFound => "Job not found",
            Self::DismissalAmbiguous => "Dismissal matches no single job",
            Self::DismissalBeforeEmployment => "Dismissal date precedes employment date",

            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
