use futures::future::BoxFuture;
use taskforge_domain::task::Task;

use crate::errors::{StorageError, StoreError};

// =============================================================================
// TaskStore
// =============================================================================

/// Durable home of the server's task collection.
///
/// The collection is always read and written as a whole. Implementations do
/// not coordinate concurrent writers; [`TaskLedger`](crate::ledger::TaskLedger)
/// serializes them.
pub trait TaskStore: Clone + Send + Sync + 'static {
    /// Loads the full collection in stored order.
    ///
    /// Fails with [`StoreError::Missing`] when the store does not exist and
    /// [`StoreError::DataFormat`] when its content is not a list.
    fn read_all(&self) -> BoxFuture<'_, Result<Vec<Task>, StoreError>>;

    /// Replaces the full collection.
    fn write_all(&self, tasks: Vec<Task>) -> BoxFuture<'_, Result<(), StoreError>>;
}

// =============================================================================
// KeyValueStorage
// =============================================================================

/// String-keyed storage the board client persists to.
pub trait KeyValueStorage {
    /// Returns the stored value, or `None` when the key was never written.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] when the storage cannot be accessed.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] when the value cannot be stored.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
