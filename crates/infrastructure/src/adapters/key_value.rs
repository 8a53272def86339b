use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use taskforge_workflow::errors::StorageError;
use taskforge_workflow::ports::KeyValueStorage;

// =============================================================================
// FileKeyValueStorage
// =============================================================================

/// Key-value storage keeping one file per key inside a directory.
///
/// The directory is created on the first write.
#[derive(Debug, Clone)]
pub struct FileKeyValueStorage {
    directory: PathBuf,
}

impl FileKeyValueStorage {
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.directory.join(key)
    }
}

impl KeyValueStorage for FileKeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.entry_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(StorageError::Read {
                key: key.to_string(),
                message: error.to_string(),
            }),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_error = |error: std::io::Error| StorageError::Write {
            key: key.to_string(),
            message: error.to_string(),
        };
        std::fs::create_dir_all(&self.directory).map_err(write_error)?;
        std::fs::write(self.entry_path(key), value).map_err(write_error)
    }
}

// =============================================================================
// InMemoryKeyValueStorage
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStorage {
    entries: HashMap<String, String>,
}

impl InMemoryKeyValueStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl KeyValueStorage for InMemoryKeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
