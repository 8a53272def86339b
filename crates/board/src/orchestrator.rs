//! The board's single owner of state.
//!
//! [`Board`] holds the task list and is the only place it changes. Every
//! change goes through [`Board::dispatch`]: compute the next list, persist
//! it, render it.

use taskforge_domain::Timestamp;
use taskforge_domain::board::{
    BoardTask, BoardTaskId, TaskStatus, Transition, normalize_records,
};
use taskforge_workflow::ports::KeyValueStorage;

use crate::storage::BoardStorage;

// =============================================================================
// Intent
// =============================================================================

/// A change the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add { title: String },
    Toggle { id: BoardTaskId },
    Move { id: BoardTaskId, to: TaskStatus },
    Rename { id: BoardTaskId, title: String },
    Delete { id: BoardTaskId },
}

/// Receives intents emitted by the interaction layer.
pub trait IntentHandler {
    fn handle(&mut self, intent: Intent);
}

// =============================================================================
// BoardView
// =============================================================================

/// Where the board renders to.
pub trait BoardView {
    fn set_loading(&mut self, loading: bool);

    fn render(&mut self, tasks: &[BoardTask]);

    /// Shows the menu of one task and hides every other one.
    fn show_menu(&mut self, _open_menu: Option<&BoardTaskId>) {}
}

// =============================================================================
// Board
// =============================================================================

pub struct Board<K, V> {
    tasks: Vec<BoardTask>,
    storage: BoardStorage<K>,
    view: V,
}

impl<K, V> Board<K, V>
where
    K: KeyValueStorage,
    V: BoardView,
{
    /// Loads, normalizes and renders the stored board.
    ///
    /// The view is in loading state for the duration of the call.
    pub fn boot(storage: BoardStorage<K>, mut view: V) -> Self {
        view.set_loading(true);

        let records = storage.load();
        let tasks = normalize_records(&records, Timestamp::now(), BoardTaskId::generate);
        tracing::debug!(count = tasks.len(), "board loaded");
        view.render(&tasks);

        view.set_loading(false);
        Self {
            tasks,
            storage,
            view,
        }
    }

    /// Applies `intent`, then persists and renders the result.
    ///
    /// A persistence failure is logged; the in-memory board still changes.
    pub fn dispatch(&mut self, intent: Intent) {
        let transition = Self::transition_for(intent);
        self.tasks = transition.apply(std::mem::take(&mut self.tasks));

        if let Err(error) = self.storage.save(&self.tasks) {
            tracing::error!("Failed to save tasks: {}", error);
        }
        self.view.render(&self.tasks);
    }

    fn transition_for(intent: Intent) -> Transition {
        match intent {
            Intent::Add { title } => Transition::Add(BoardTask::new(
                BoardTaskId::generate(),
                title.trim(),
                Timestamp::now(),
            )),
            Intent::Toggle { id } => Transition::Toggle(id),
            Intent::Move { id, to } => Transition::Move(id, to),
            Intent::Rename { id, title } => Transition::Rename(id, title),
            Intent::Delete { id } => Transition::Delete(id),
        }
    }

    #[must_use]
    pub fn tasks(&self) -> &[BoardTask] {
        &self.tasks
    }

    #[must_use]
    pub const fn storage(&self) -> &BoardStorage<K> {
        &self.storage
    }

    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    pub const fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

impl<K, V> IntentHandler for Board<K, V>
where
    K: KeyValueStorage,
    V: BoardView,
{
    fn handle(&mut self, intent: Intent) {
        self.dispatch(intent);
    }
}

// =============================================================================
// Tests
// =============================================================================
