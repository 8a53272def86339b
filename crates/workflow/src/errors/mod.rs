//! Workflow error types.
//!
//! - [`StoreError`]: failures reported by a [`TaskStore`](crate::ports::TaskStore)
//! - [`StorageError`]: failures reported by a [`KeyValueStorage`](crate::ports::KeyValueStorage)
//! - [`WorkflowError`]: what a ledger operation can fail with; each variant
//!   has a fixed HTTP meaning in the API layer

use taskforge_domain::task::{MAX_SAFE_ID, TaskId, TaskIdError};
use thiserror::Error;

// =============================================================================
// Type Aliases
// =============================================================================

pub type WorkflowResult<T> = Result<T, WorkflowError>;

// =============================================================================
// StoreError
// =============================================================================

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store file '{path}' does not exist")]
    Missing { path: String },

    #[error("Data format invalid")]
    DataFormat,

    #[error("store content could not be (de)serialized: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("store I/O failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl StoreError {
    #[must_use]
    pub fn missing(path: impl Into<String>) -> Self {
        Self::Missing { path: path.into() }
    }
}

// =============================================================================
// StorageError
// =============================================================================

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage entry '{key}' could not be read: {message}")]
    Read { key: String, message: String },

    #[error("storage entry '{key}' could not be written: {message}")]
    Write { key: String, message: String },
}

// =============================================================================
// WorkflowError
// =============================================================================

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("{message}")]
    Validation { message: String },

    #[error("Task {id} not found")]
    NotFound { id: TaskId },

    #[error("Tasks store not found ({path}).")]
    StoreMissing { path: String },

    #[error("Data format invalid")]
    DataFormat,

    #[error("Task ids exhausted (the largest id is {})", MAX_SAFE_ID)]
    IdsExhausted,

    #[error(transparent)]
    Unclassified(StoreError),
}

impl WorkflowError {
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn not_found(id: TaskId) -> Self {
        Self::NotFound { id }
    }

    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::NotFound { .. })
    }
}

impl From<StoreError> for WorkflowError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Missing { path } => Self::StoreMissing { path },
            StoreError::DataFormat => Self::DataFormat,
            other @ (StoreError::Serialization { .. } | StoreError::Io { .. }) => {
                Self::Unclassified(other)
            }
        }
    }
}

impl From<TaskIdError> for WorkflowError {
    fn from(error: TaskIdError) -> Self {
        Self::validation(error.to_string())
    }
}

// =============================================================================
// Tests
// =============================================================================
