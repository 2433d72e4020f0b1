//! HTTP status of each error code

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    pub fn http_status(self) -> StatusCode {
        match self {
            Self::NotFound
            | Self::EmployeeNotFound
            | Self::NoEmployees
            | Self::PositionNotFound
            | Self::DivisionNotFound
            | Self::JobNotFound => StatusCode::NOT_FOUND,

            Self::Conflict
            | Self::EmployeeHasJobs
            | Self::PositionInUse
            | Self::DivisionInUse
            | Self::DismissalAmbiguous => StatusCode::CONFLICT,

            Self::InternalError | Self::DatabaseError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::ValueTooLong
            | Self::DismissalBeforeEmployment => StatusCode::BAD_REQUEST,
        }
    }
}
