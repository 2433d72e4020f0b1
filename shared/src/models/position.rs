//! Position Model

use serde::{Deserialize, Serialize};

/// Position entity (table `FVA_positions`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Position {
    pub id: i64,
    pub title: String,
}

/// Create position payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionCreate {
    pub title: String,
}

impl PositionCreate {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Update position payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionUpdate {
    pub title: String,
}
