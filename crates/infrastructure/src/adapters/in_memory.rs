use std::sync::Arc;

use futures::future::BoxFuture;
use taskforge_domain::task::Task;
use taskforge_workflow::errors::StoreError;
use taskforge_workflow::ports::TaskStore;
use tokio::sync::RwLock;

const IN_MEMORY_LOCATION: &str = "memory";

/// Task store kept in process memory.
///
/// `None` stands for a store that does not exist, so the missing-store path
/// can be exercised without touching the file system. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    tasks: Arc<RwLock<Option<Vec<Task>>>>,
}

impl InMemoryTaskStore {
    #[must_use]
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(Some(tasks))),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    #[must_use]
    pub fn missing() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> Option<Vec<Task>> {
        self.tasks.read().await.clone()
    }
}

impl TaskStore for InMemoryTaskStore {
    fn read_all(&self) -> BoxFuture<'_, Result<Vec<Task>, StoreError>> {
        Box::pin(async move {
            self.tasks
                .read()
                .await
                .clone()
                .ok_or_else(|| StoreError::missing(IN_MEMORY_LOCATION))
        })
    }

    fn write_all(&self, tasks: Vec<Task>) -> BoxFuture<'_, Result<(), StoreError>> {
        Box::pin(async move {
            *self.tasks.write().await = Some(tasks);
            Ok(())
        })
    }
}
