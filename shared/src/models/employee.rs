//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employee entity (table `FVA_employees`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub last_name: String,
    pub name: String,
    pub patronymic: String,
    pub address: String,
    pub birth_date: NaiveDate,
}

/// Create employee payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub last_name: String,
    pub patronymic: String,
    /// Not part of the original add contract, stored as empty text when omitted
    #[serde(default)]
    pub address: String,
    pub birth_date: NaiveDate,
}

impl EmployeeCreate {
    pub fn new(
        name: impl Into<String>,
        last_name: impl Into<String>,
        patronymic: impl Into<String>,
        address: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            last_name: last_name.into(),
            patronymic: patronymic.into(),
            address: address.into(),
            birth_date,
        }
    }
}

/// Update employee payload (absent fields keep their stored value)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub last_name: Option<String>,
    pub name: Option<String>,
    pub patronymic: Option<String>,
    pub address: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

impl EmployeeUpdate {
    /// Update touching only the last name
    pub fn last_name(last_name: impl Into<String>) -> Self {
        Self {
            last_name: Some(last_name.into()),
            ..Self::default()
        }
    }
}

/// Filter honoured by the employee listing
///
/// At most one predicate applies; a division filter takes priority over
/// the employment date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeFilter {
    /// Every employee with at least one job
    All,
    /// Jobs in the given division
    Division(i64),
    /// Jobs whose employment date is strictly after the given date
    EmployedAfter(NaiveDate),
}

impl EmployeeFilter {
    /// Pick the filter from the two optional inputs, division first
    pub fn from_parts(division_id: Option<i64>, employed_after: Option<NaiveDate>) -> Self {
        match (division_id, employed_after) {
            (Some(id), _) => Self::Division(id),
            (None, Some(date)) => Self::EmployedAfter(date),
            (None, None) => Self::All,
        }
    }
}
