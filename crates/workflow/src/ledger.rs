//! Server-side gateway to the task collection.
//!
//! Every mutation is a read-modify-write of the whole collection. The
//! ledger holds a write gate across that cycle so concurrent requests on
//! the same ledger never overwrite each other's changes.

use taskforge_domain::Timestamp;
use taskforge_domain::task::{Task, TaskChanges, TaskId, next_task_id};
use tokio::sync::Mutex;

use crate::errors::{WorkflowError, WorkflowResult};
use crate::ports::TaskStore;

pub const TITLE_REQUIRED: &str = "Invalid \"title\": non-empty string required";
pub const UPDATE_FIELDS_REQUIRED: &str =
    "Provide at least one valid field: \"title\" (string) or \"done\" (boolean)";

// =============================================================================
// TaskLedger
// =============================================================================

pub struct TaskLedger<S> {
    store: S,
    write_gate: Mutex<()>,
}

impl<S: TaskStore> TaskLedger<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_gate: Mutex::new(()),
        }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns every task in stored order.
    ///
    /// # Errors
    ///
    /// Returns the store failure converted into a [`WorkflowError`].
    pub async fn list(&self) -> WorkflowResult<Vec<Task>> {
        Ok(self.store.read_all().await?)
    }

    /// Appends a new task with the trimmed `title`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Validation`] when the title is blank,
    /// [`WorkflowError::IdsExhausted`] when no id is left to allocate, or the
    /// store failure.
    pub async fn create(&self, title: &str) -> WorkflowResult<Task> {
        let title = title.trim();
        if title.is_empty() {
            return Err(WorkflowError::validation(TITLE_REQUIRED));
        }

        let _gate = self.write_gate.lock().await;
        let mut tasks = self.store.read_all().await?;
        let id = next_task_id(&tasks).ok_or(WorkflowError::IdsExhausted)?;
        let task = Task::new(id, title, Timestamp::now());
        tasks.push(task.clone());
        self.store.write_all(tasks).await?;

        tracing::debug!(%id, "task created");
        Ok(task)
    }

    /// Merges `changes` into the task with `id` and refreshes `updatedAt`.
    ///
    /// A supplied title is trimmed and may end up empty.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Validation`] when `changes` is empty,
    /// [`WorkflowError::NotFound`] for an unknown id, or the store failure.
    pub async fn update(&self, id: TaskId, changes: TaskChanges) -> WorkflowResult<Task> {
        if changes.is_empty() {
            return Err(WorkflowError::validation(UPDATE_FIELDS_REQUIRED));
        }
        let changes = TaskChanges {
            title: changes.title.map(|title| title.trim().to_string()),
            ..changes
        };

        let _gate = self.write_gate.lock().await;
        let mut tasks = self.store.read_all().await?;
        let slot = tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(WorkflowError::not_found(id))?;
        let updated = slot.clone().apply_changes(changes, Timestamp::now());
        *slot = updated.clone();
        self.store.write_all(tasks).await?;

        tracing::debug!(%id, "task updated");
        Ok(updated)
    }

    /// Removes every task with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::NotFound`] for an unknown id, or the store
    /// failure.
    pub async fn delete(&self, id: TaskId) -> WorkflowResult<()> {
        let _gate = self.write_gate.lock().await;
        let mut tasks = self.store.read_all().await?;
        let before = tasks.len();
        tasks.retain(|task| task.id() != id);
        if tasks.len() == before {
            return Err(WorkflowError::not_found(id));
        }
        let removed = before - tasks.len();
        self.store.write_all(tasks).await?;

        tracing::debug!(%id, removed, "task deleted");
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
