//! Division Model

use serde::{Deserialize, Serialize};

/// Division entity (table `FVA_divisions`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Division {
    pub id: i64,
    pub title: String,
}

/// Create division payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionCreate {
    pub title: String,
}

impl DivisionCreate {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Update division payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionUpdate {
    pub title: String,
}
