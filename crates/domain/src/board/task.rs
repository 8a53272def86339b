use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::status::TaskStatus;
use crate::timestamp::Timestamp;

// =============================================================================
// BoardTaskId
// =============================================================================

/// Opaque identifier of a board task, unique within one board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardTaskId(String);

impl BoardTaskId {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates a random id (UUID v4).
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoardTaskId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl From<&str> for BoardTaskId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// BoardTask
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardTask {
    pub id: BoardTaskId,
    pub title: String,
    pub done: bool,
    pub status: TaskStatus,
    pub created_at: Timestamp,
}

impl BoardTask {
    /// Creates a task in the `todo` column.
    #[must_use]
    pub fn new(id: BoardTaskId, title: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
            status: TaskStatus::Todo,
            created_at,
        }
    }

    #[must_use]
    pub fn with_status(self, status: TaskStatus) -> Self {
        Self { status, ..self }
    }

    #[must_use]
    pub fn with_done(self, done: bool) -> Self {
        Self { done, ..self }
    }
}

// =============================================================================
// Tests
// =============================================================================
