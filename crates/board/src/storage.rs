//! Board persistence on top of a [`KeyValueStorage`].
//!
//! The whole board lives under a single entry as a JSON array.

use serde_json::Value;
use taskforge_domain::board::BoardTask;
use taskforge_workflow::errors::StorageError;
use taskforge_workflow::ports::KeyValueStorage;
use thiserror::Error;

pub const STORAGE_KEY: &str = "taskforge_tasks";

#[derive(Debug, Error)]
pub enum BoardStorageError {
    #[error("board could not be serialized: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub struct BoardStorage<K> {
    storage: K,
}

impl<K: KeyValueStorage> BoardStorage<K> {
    #[must_use]
    pub const fn new(storage: K) -> Self {
        Self { storage }
    }

    #[must_use]
    pub const fn storage(&self) -> &K {
        &self.storage
    }

    /// Returns the stored records, or an empty list when nothing usable is
    /// stored. Failures are logged and swallowed.
    pub fn load(&self) -> Vec<Value> {
        let raw = match self.storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(error) => {
                tracing::error!("Failed to load tasks from storage: {}", error);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(Value::Array(records)) => records,
            Ok(Value::Null) => Vec::new(),
            Ok(other) => {
                tracing::error!("Stored tasks are not a list (found {})", json_kind(&other));
                Vec::new()
            }
            Err(error) => {
                tracing::error!("Failed to load tasks from storage: {}", error);
                Vec::new()
            }
        }
    }

    /// Overwrites the stored board with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStorageError`] when the list cannot be serialized or
    /// written.
    pub fn save(&mut self, tasks: &[BoardTask]) -> Result<(), BoardStorageError> {
        let serialized = serde_json::to_string(tasks)?;
        self.storage.set_item(STORAGE_KEY, &serialized)?;
        Ok(())
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// =============================================================================
// Tests
// =============================================================================
