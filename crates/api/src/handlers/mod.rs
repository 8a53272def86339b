//! Request handlers.

mod health;
mod tasks;

pub use health::health_check;
pub use tasks::{create_task, delete_task, list_tasks, update_task};
