//! Pure board transitions.
//!
//! [`Transition::apply`] is the only way a board list changes: it consumes
//! the current list and returns the next one. Transitions that name an id
//! not on the board return the list unchanged.

use super::status::TaskStatus;
use super::task::{BoardTask, BoardTaskId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Puts a new task at the top of the board.
    Add(BoardTask),
    /// Flips the completion flag.
    Toggle(BoardTaskId),
    /// Moves a task to another column.
    Move(BoardTaskId, TaskStatus),
    /// Replaces the title verbatim.
    Rename(BoardTaskId, String),
    /// Removes a task.
    Delete(BoardTaskId),
}

impl Transition {
    #[must_use]
    pub fn apply(self, tasks: Vec<BoardTask>) -> Vec<BoardTask> {
        match self {
            Self::Add(task) => std::iter::once(task).chain(tasks).collect(),
            Self::Toggle(id) => update_matching(tasks, &id, toggle),
            Self::Move(id, status) => update_matching(tasks, &id, |task| move_to(task, status)),
            Self::Rename(id, title) => {
                update_matching(tasks, &id, |task| BoardTask { title: title.clone(), ..task })
            }
            Self::Delete(id) => tasks.into_iter().filter(|task| task.id != id).collect(),
        }
    }
}

fn update_matching(
    tasks: Vec<BoardTask>,
    id: &BoardTaskId,
    update: impl Fn(BoardTask) -> BoardTask,
) -> Vec<BoardTask> {
    tasks
        .into_iter()
        .map(|task| if &task.id == id { update(task) } else { task })
        .collect()
}

/// Turning `done` on moves the task to `done`; turning it off sends a
/// `done` task back to `todo` and leaves other columns alone.
fn toggle(task: BoardTask) -> BoardTask {
    let done = !task.done;
    let status = if done {
        TaskStatus::Done
    } else if task.status.is_done() {
        TaskStatus::Todo
    } else {
        task.status
    };
    BoardTask {
        done,
        status,
        ..task
    }
}

/// Moving into `done` sets the flag. Moving out of `done` keeps the flag
/// as it was, so a task can sit in `todo` while still marked complete.
fn move_to(task: BoardTask, status: TaskStatus) -> BoardTask {
    BoardTask {
        done: status.is_done() || task.done,
        status,
        ..task
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::Timestamp;
    use rstest::rstest;

    fn task(id: &str, status: TaskStatus, done: bool) -> BoardTask {
        BoardTask::new(BoardTaskId::new(id), format!("task {id}"), Timestamp::now())
            .with_status(status)
            .with_done(done)
    }

    fn only(tasks: &[BoardTask]) -> &BoardTask {
        assert_eq!(tasks.len(), 1);
        &tasks[0]
    }

    mod add {
        use super::*;

        #[rstest]
        fn prepends() {
            let existing = vec![task("a", TaskStatus::Todo, false)];

            let tasks = Transition::Add(task("b", TaskStatus::Todo, false)).apply(existing);

            assert_eq!(tasks[0].id.as_str(), "b");
            assert_eq!(tasks[1].id.as_str(), "a");
        }
    }

    mod toggle {
        use super::*;

        #[rstest]
        fn doing_task_goes_to_done_then_back_to_todo() {
            let id = BoardTaskId::new("a");
            let tasks = vec![task("a", TaskStatus::Doing, false)];

            let tasks = Transition::Toggle(id.clone()).apply(tasks);
            assert!(only(&tasks).done);
            assert_eq!(only(&tasks).status, TaskStatus::Done);

            let tasks = Transition::Toggle(id).apply(tasks);
            assert!(!only(&tasks).done);
            assert_eq!(only(&tasks).status, TaskStatus::Todo);
        }

        #[rstest]
        fn turning_off_outside_done_keeps_status() {
            let tasks = vec![task("a", TaskStatus::Doing, true)];

            let tasks = Transition::Toggle(BoardTaskId::new("a")).apply(tasks);

            assert!(!only(&tasks).done);
            assert_eq!(only(&tasks).status, TaskStatus::Doing);
        }

        #[rstest]
        fn only_the_matching_task_changes() {
            let tasks = vec![
                task("a", TaskStatus::Todo, false),
                task("b", TaskStatus::Todo, false),
            ];

            let tasks = Transition::Toggle(BoardTaskId::new("b")).apply(tasks);

            assert!(!tasks[0].done);
            assert!(tasks[1].done);
        }
    }

    mod move_to {
        use super::*;

        #[rstest]
        #[case(TaskStatus::Todo)]
        #[case(TaskStatus::Doing)]
        fn into_done_forces_done(#[case] from: TaskStatus) {
            let tasks = vec![task("a", from, false)];

            let tasks = Transition::Move(BoardTaskId::new("a"), TaskStatus::Done).apply(tasks);

            assert!(only(&tasks).done);
            assert_eq!(only(&tasks).status, TaskStatus::Done);
        }

        // Documented quirk: leaving `done` through a move does not clear the flag.
        #[rstest]
        #[case(TaskStatus::Todo)]
        #[case(TaskStatus::Doing)]
        fn out_of_done_keeps_done_flag(#[case] to: TaskStatus) {
            let tasks = vec![task("a", TaskStatus::Done, true)];

            let tasks = Transition::Move(BoardTaskId::new("a"), to).apply(tasks);

            assert!(only(&tasks).done);
            assert_eq!(only(&tasks).status, to);
        }

        #[rstest]
        fn between_open_columns_keeps_flag_clear() {
            let tasks = vec![task("a", TaskStatus::Todo, false)];

            let tasks = Transition::Move(BoardTaskId::new("a"), TaskStatus::Doing).apply(tasks);

            assert!(!only(&tasks).done);
            assert_eq!(only(&tasks).status, TaskStatus::Doing);
        }
    }

    mod rename {
        use super::*;

        #[rstest]
        fn replaces_title_verbatim() {
            let tasks = vec![task("a", TaskStatus::Todo, false)];

            let tasks =
                Transition::Rename(BoardTaskId::new("a"), "  spaced  ".to_string()).apply(tasks);

            assert_eq!(only(&tasks).title, "  spaced  ");
        }
    }

    mod delete {
        use super::*;

        #[rstest]
        fn removes_the_matching_task() {
            let tasks = vec![
                task("a", TaskStatus::Todo, false),
                task("b", TaskStatus::Todo, false),
            ];

            let tasks = Transition::Delete(BoardTaskId::new("a")).apply(tasks);

            assert_eq!(only(&tasks).id.as_str(), "b");
        }
    }

    #[rstest]
    #[case(Transition::Toggle(BoardTaskId::new("missing")))]
    #[case(Transition::Move(BoardTaskId::new("missing"), TaskStatus::Done))]
    #[case(Transition::Rename(BoardTaskId::new("missing"), "x".to_string()))]
    #[case(Transition::Delete(BoardTaskId::new("missing")))]
    fn unknown_id_leaves_board_unchanged(#[case] transition: Transition) {
        let tasks = vec![task("a", TaskStatus::Doing, false)];

        assert_eq!(transition.apply(tasks.clone()), tasks);
    }
}
