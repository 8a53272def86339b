use std::sync::Arc;

use taskforge_workflow::ledger::TaskLedger;
use taskforge_workflow::ports::TaskStore;

// =============================================================================
// AppState
// =============================================================================

#[derive(Clone)]
pub struct AppState<Store>
where
    Store: TaskStore,
{
    pub ledger: Arc<TaskLedger<Store>>,
}

impl<Store> AppState<Store>
where
    Store: TaskStore,
{
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            ledger: Arc::new(TaskLedger::new(store)),
        }
    }

    #[must_use]
    pub const fn from_arc(ledger: Arc<TaskLedger<Store>>) -> Self {
        Self { ledger }
    }
}
