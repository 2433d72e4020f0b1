//! Error category, derived from the code range

use super::codes::ErrorCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    General,
    Employee,
    Position,
    Division,
    Job,
    /// Failures of the service itself (5xx); logged when rendered
    System,
}

impl ErrorCategory {
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Employee,
            2000..3000 => Self::Position,
            3000..4000 => Self::Division,
            4000..5000 => Self::Job,
            _ => Self::System,
        }
    }
}

impl ErrorCode {
    pub fn category(self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
