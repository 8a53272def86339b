//! Client-side board records.
//!
//! The board keeps its own copy of the task list, with a three-valued
//! workflow [`TaskStatus`] next to the completion flag. Every change to
//! that list is expressed as a [`Transition`] and applied by a pure
//! function that returns the next list.

pub mod normalize;
pub mod status;
pub mod task;
pub mod transition;

pub use normalize::{normalize_records, sort_newest_first};
pub use status::{TaskStatus, UnknownStatus};
pub use task::{BoardTask, BoardTaskId};
pub use transition::Transition;
