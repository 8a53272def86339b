//! HTML rendering of the board.
//!
//! [`render_columns`] is pure: the same tasks and open menu always yield the
//! same markup. [`HtmlBoardView`] keeps the latest output and is the
//! [`BoardView`] the board renders into.

use taskforge_domain::board::{BoardTask, BoardTaskId, TaskStatus};

use crate::orchestrator::BoardView;

// =============================================================================
// Escaping
// =============================================================================

/// Escapes `& < > " '` so user text can be placed in markup and attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

// =============================================================================
// Columns
// =============================================================================

/// Inner HTML of the three board columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardColumns {
    pub todo: String,
    pub doing: String,
    pub done: String,
}

impl BoardColumns {
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &str {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::Doing => &self.doing,
            TaskStatus::Done => &self.done,
        }
    }

    fn column_mut(&mut self, status: TaskStatus) -> &mut String {
        match status {
            TaskStatus::Todo => &mut self.todo,
            TaskStatus::Doing => &mut self.doing,
            TaskStatus::Done => &mut self.done,
        }
    }
}

/// Renders every task into the column of its status, keeping list order.
///
/// Only the menu of `open_menu` is visible.
#[must_use]
pub fn render_columns(tasks: &[BoardTask], open_menu: Option<&BoardTaskId>) -> BoardColumns {
    let mut columns = BoardColumns::default();
    for task in tasks {
        let menu_open = open_menu == Some(&task.id);
        columns
            .column_mut(task.status)
            .push_str(&render_item(task, menu_open));
    }
    columns
}

fn render_item(task: &BoardTask, menu_open: bool) -> String {
    let checked = if task.done { " checked" } else { "" };
    let title_class = if task.done { "task-title is-done" } else { "task-title" };
    let hidden = if menu_open { "" } else { " hidden" };
    let move_buttons: String = TaskStatus::ALL
        .iter()
        .map(|status| {
            format!(
                "<button data-menu=\"move\" data-to=\"{}\">{}</button>",
                status.as_str(),
                status.label()
            )
        })
        .collect();

    format!(
        concat!(
            "<li class=\"task-item\" data-id=\"{id}\">",
            "<div class=\"task-meta\">",
            "<label class=\"task-check\" data-action=\"toggle\" title=\"Toggle done\">",
            "<input type=\"checkbox\"{checked} />",
            "</label>",
            "<span class=\"{title_class}\">{title}</span>",
            "</div>",
            "<div class=\"task-actions\">",
            "<button class=\"btn-kebab\" data-action=\"menu\" aria-haspopup=\"menu\" aria-label=\"Actions\">\u{22ef}</button>",
            "</div>",
            "<div class=\"menu\"{hidden} role=\"menu\" aria-label=\"Task actions\">",
            "<h4>Change status</h4>",
            "{move_buttons}",
            "<h4>Other</h4>",
            "<button data-menu=\"rename\">Rename</button>",
            "<button class=\"danger\" data-menu=\"delete\">Delete</button>",
            "</div>",
            "</li>"
        ),
        id = escape_html(task.id.as_str()),
        checked = checked,
        title_class = title_class,
        title = escape_html(&task.title),
        hidden = hidden,
        move_buttons = move_buttons,
    )
}

// =============================================================================
// HtmlBoardView
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct HtmlBoardView {
    tasks: Vec<BoardTask>,
    columns: BoardColumns,
    loading: bool,
    open_menu: Option<BoardTaskId>,
}

impl HtmlBoardView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn columns(&self) -> &BoardColumns {
        &self.columns
    }

    /// Form controls are disabled while loading.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub const fn open_menu(&self) -> Option<&BoardTaskId> {
        self.open_menu.as_ref()
    }

    fn refresh(&mut self) {
        self.columns = render_columns(&self.tasks, self.open_menu.as_ref());
    }
}

impl BoardView for HtmlBoardView {
    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn render(&mut self, tasks: &[BoardTask]) {
        self.tasks = tasks.to_vec();
        self.refresh();
    }

    fn show_menu(&mut self, open_menu: Option<&BoardTaskId>) {
        if self.open_menu.as_ref() != open_menu {
            self.open_menu = open_menu.cloned();
            self.refresh();
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
