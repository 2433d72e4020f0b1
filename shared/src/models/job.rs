//! Job Model
//!
//! A job is the employment record tying an employee to a position inside a
//! division, bounded by the employment date and an optional dismissal date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Job entity (table `FVA_jobs`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Job {
    pub id: i64,
    pub employee_id: i64,
    pub position_id: i64,
    pub division_id: i64,
    pub date_of_employment: NaiveDate,
    pub date_of_dismissal: Option<NaiveDate>,
}

impl Job {
    /// Whether the job has no dismissal date yet
    pub fn is_open(&self) -> bool {
        self.date_of_dismissal.is_none()
    }
}

/// Employment payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobCreate {
    pub employee_id: i64,
    pub position_id: i64,
    pub division_id: i64,
    pub date_of_employment: NaiveDate,
}

impl JobCreate {
    pub fn new(
        employee_id: i64,
        position_id: i64,
        division_id: i64,
        date_of_employment: NaiveDate,
    ) -> Self {
        Self {
            employee_id,
            position_id,
            division_id,
            date_of_employment,
        }
    }
}

/// Dismissal payload, keyed by the employee (`id` on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDismissal {
    #[serde(rename = "id")]
    pub employee_id: i64,
    pub date_of_dismissal: NaiveDate,
}
