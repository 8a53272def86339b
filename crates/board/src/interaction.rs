//! Gesture handling.
//!
//! [`Interaction`] tracks the form input, the open task menu and any
//! pending question (rename prompt or delete confirmation). It turns
//! gestures into [`Intent`]s delivered to an [`IntentHandler`].
//!
//! While a question is pending only its answer is accepted; every other
//! gesture is dropped.

use taskforge_domain::board::{BoardTaskId, TaskStatus};

use crate::orchestrator::{Intent, IntentHandler};

// =============================================================================
// Gesture
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    /// The form input now holds this text.
    Input(String),
    /// The add form was submitted.
    Submit,
    /// The completion checkbox of a task was clicked.
    ToggleClicked(BoardTaskId),
    /// The menu button of a task was clicked.
    MenuButtonClicked(BoardTaskId),
    /// A "move to" entry was chosen in a task menu.
    MoveChosen(BoardTaskId, TaskStatus),
    /// The rename entry was chosen in a task menu.
    RenameChosen {
        id: BoardTaskId,
        current_title: String,
    },
    /// The delete entry was chosen in a task menu.
    DeleteChosen(BoardTaskId),
    /// A click landed outside every task item.
    ClickedOutside,
    EscapePressed,
    /// Answer to the rename prompt; `None` when cancelled.
    RenameAnswered(Option<String>),
    /// Answer to the delete confirmation.
    DeleteAnswered(bool),
}

// =============================================================================
// Modal
// =============================================================================

/// Question the user still has to answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Idle,
    AwaitingRename {
        id: BoardTaskId,
        current_title: String,
    },
    AwaitingDeleteConfirmation {
        id: BoardTaskId,
    },
}

impl Modal {
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

// =============================================================================
// Interaction
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct Interaction {
    input: String,
    open_menu: Option<BoardTaskId>,
    modal: Modal,
    loading: bool,
}

impl Interaction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn open_menu(&self) -> Option<&BoardTaskId> {
        self.open_menu.as_ref()
    }

    #[must_use]
    pub const fn modal(&self) -> &Modal {
        &self.modal
    }

    /// Submissions are ignored while loading.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn handle(&mut self, gesture: Gesture, handler: &mut impl IntentHandler) {
        if !self.modal.is_idle() {
            self.answer(gesture, handler);
            return;
        }

        match gesture {
            Gesture::Input(text) => self.input = text,
            Gesture::Submit => self.submit(handler),
            Gesture::ToggleClicked(id) => handler.handle(Intent::Toggle { id }),
            Gesture::MenuButtonClicked(id) => self.toggle_menu(id),
            Gesture::MoveChosen(id, to) => {
                handler.handle(Intent::Move { id, to });
                self.close_menu();
            }
            Gesture::RenameChosen { id, current_title } => {
                self.close_menu();
                self.modal = Modal::AwaitingRename { id, current_title };
            }
            Gesture::DeleteChosen(id) => {
                self.close_menu();
                self.modal = Modal::AwaitingDeleteConfirmation { id };
            }
            Gesture::ClickedOutside | Gesture::EscapePressed => self.close_menu(),
            Gesture::RenameAnswered(_) | Gesture::DeleteAnswered(_) => {
                tracing::trace!("answer without a pending question ignored");
            }
        }
    }

    fn submit(&mut self, handler: &mut impl IntentHandler) {
        if self.loading {
            return;
        }
        let title = self.input.trim();
        if title.is_empty() {
            return;
        }
        handler.handle(Intent::Add {
            title: title.to_string(),
        });
        self.input.clear();
    }

    fn toggle_menu(&mut self, id: BoardTaskId) {
        if self.open_menu.as_ref() == Some(&id) {
            self.open_menu = None;
        } else {
            self.open_menu = Some(id);
        }
    }

    fn close_menu(&mut self) {
        self.open_menu = None;
    }

    fn answer(&mut self, gesture: Gesture, handler: &mut impl IntentHandler) {
        match (std::mem::take(&mut self.modal), gesture) {
            (Modal::AwaitingRename { id, .. }, Gesture::RenameAnswered(answer)) => {
                let title = answer.as_deref().map(str::trim).unwrap_or_default();
                if !title.is_empty() {
                    handler.handle(Intent::Rename {
                        id,
                        title: title.to_string(),
                    });
                }
            }
            (Modal::AwaitingDeleteConfirmation { id }, Gesture::DeleteAnswered(confirmed)) => {
                if confirmed {
                    handler.handle(Intent::Delete { id });
                }
            }
            (pending, _) => self.modal = pending,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Default)]
    struct Recorder {
        intents: Vec<Intent>,
    }

    impl IntentHandler for Recorder {
        fn handle(&mut self, intent: Intent) {
            self.intents.push(intent);
        }
    }

    fn id(value: &str) -> BoardTaskId {
        BoardTaskId::new(value)
    }

    fn run(interaction: &mut Interaction, gestures: Vec<Gesture>) -> Vec<Intent> {
        let mut recorder = Recorder::default();
        for gesture in gestures {
            interaction.handle(gesture, &mut recorder);
        }
        recorder.intents
    }

    mod form {
        use super::*;

        #[rstest]
        fn submit_emits_trimmed_title_and_clears_input() {
            let mut interaction = Interaction::new();

            let intents = run(
                &mut interaction,
                vec![Gesture::Input("  Write report ".to_string()), Gesture::Submit],
            );

            assert_eq!(
                intents,
                vec![Intent::Add {
                    title: "Write report".to_string()
                }]
            );
            assert_eq!(interaction.input(), "");
        }

        #[rstest]
        #[case("")]
        #[case("   ")]
        fn blank_submit_is_ignored(#[case] text: &str) {
            let mut interaction = Interaction::new();

            let intents = run(
                &mut interaction,
                vec![Gesture::Input(text.to_string()), Gesture::Submit],
            );

            assert!(intents.is_empty());
            assert_eq!(interaction.input(), text);
        }

        #[rstest]
        fn submit_while_loading_is_ignored() {
            let mut interaction = Interaction::new();
            interaction.set_loading(true);

            let intents = run(
                &mut interaction,
                vec![Gesture::Input("task".to_string()), Gesture::Submit],
            );

            assert!(intents.is_empty());
            assert_eq!(interaction.input(), "task");
        }
    }

    mod menu {
        use super::*;

        #[rstest]
        fn menu_button_opens_then_closes() {
            let mut interaction = Interaction::new();

            run(&mut interaction, vec![Gesture::MenuButtonClicked(id("a"))]);
            assert_eq!(interaction.open_menu(), Some(&id("a")));

            run(&mut interaction, vec![Gesture::MenuButtonClicked(id("a"))]);
            assert_eq!(interaction.open_menu(), None);
        }

        #[rstest]
        fn opening_another_menu_closes_the_first() {
            let mut interaction = Interaction::new();

            run(
                &mut interaction,
                vec![
                    Gesture::MenuButtonClicked(id("a")),
                    Gesture::MenuButtonClicked(id("b")),
                ],
            );

            assert_eq!(interaction.open_menu(), Some(&id("b")));
        }

        #[rstest]
        #[case(Gesture::ClickedOutside)]
        #[case(Gesture::EscapePressed)]
        fn outside_click_and_escape_close_the_menu(#[case] gesture: Gesture) {
            let mut interaction = Interaction::new();

            run(
                &mut interaction,
                vec![Gesture::MenuButtonClicked(id("a")), gesture],
            );

            assert_eq!(interaction.open_menu(), None);
        }

        #[rstest]
        fn move_emits_and_closes_the_menu() {
            let mut interaction = Interaction::new();

            let intents = run(
                &mut interaction,
                vec![
                    Gesture::MenuButtonClicked(id("a")),
                    Gesture::MoveChosen(id("a"), TaskStatus::Doing),
                ],
            );

            assert_eq!(
                intents,
                vec![Intent::Move {
                    id: id("a"),
                    to: TaskStatus::Doing
                }]
            );
            assert_eq!(interaction.open_menu(), None);
        }

        #[rstest]
        fn checkbox_emits_toggle_without_touching_the_menu() {
            let mut interaction = Interaction::new();

            let intents = run(
                &mut interaction,
                vec![
                    Gesture::MenuButtonClicked(id("b")),
                    Gesture::ToggleClicked(id("a")),
                ],
            );

            assert_eq!(intents, vec![Intent::Toggle { id: id("a") }]);
            assert_eq!(interaction.open_menu(), Some(&id("b")));
        }
    }

    mod rename {
        use super::*;

        fn rename_chosen() -> Gesture {
            Gesture::RenameChosen {
                id: id("a"),
                current_title: "old".to_string(),
            }
        }

        #[rstest]
        fn prompt_is_prefilled_and_menu_closed() {
            let mut interaction = Interaction::new();

            run(
                &mut interaction,
                vec![Gesture::MenuButtonClicked(id("a")), rename_chosen()],
            );

            assert_eq!(
                interaction.modal(),
                &Modal::AwaitingRename {
                    id: id("a"),
                    current_title: "old".to_string()
                }
            );
            assert_eq!(interaction.open_menu(), None);
        }

        #[rstest]
        fn answer_emits_trimmed_title() {
            let mut interaction = Interaction::new();

            let intents = run(
                &mut interaction,
                vec![
                    rename_chosen(),
                    Gesture::RenameAnswered(Some("  new  ".to_string())),
                ],
            );

            assert_eq!(
                intents,
                vec![Intent::Rename {
                    id: id("a"),
                    title: "new".to_string()
                }]
            );
            assert!(interaction.modal().is_idle());
        }

        #[rstest]
        #[case(None)]
        #[case(Some(String::new()))]
        #[case(Some("   ".to_string()))]
        fn cancel_or_blank_answer_emits_nothing(#[case] answer: Option<String>) {
            let mut interaction = Interaction::new();

            let intents = run(
                &mut interaction,
                vec![rename_chosen(), Gesture::RenameAnswered(answer)],
            );

            assert!(intents.is_empty());
            assert!(interaction.modal().is_idle());
        }

        #[rstest]
        fn other_gestures_wait_for_the_answer() {
            let mut interaction = Interaction::new();

            let intents = run(
                &mut interaction,
                vec![
                    rename_chosen(),
                    Gesture::ToggleClicked(id("a")),
                    Gesture::DeleteAnswered(true),
                    Gesture::MenuButtonClicked(id("b")),
                ],
            );

            assert!(intents.is_empty());
            assert!(!interaction.modal().is_idle());
            assert_eq!(interaction.open_menu(), None);
        }
    }

    mod delete {
        use super::*;

        #[rstest]
        #[case(true, vec![Intent::Delete { id: BoardTaskId::new("a") }])]
        #[case(false, vec![])]
        fn confirmation_decides(#[case] confirmed: bool, #[case] expected: Vec<Intent>) {
            let mut interaction = Interaction::new();

            let intents = run(
                &mut interaction,
                vec![
                    Gesture::MenuButtonClicked(id("a")),
                    Gesture::DeleteChosen(id("a")),
                    Gesture::DeleteAnswered(confirmed),
                ],
            );

            assert_eq!(intents, expected);
            assert!(interaction.modal().is_idle());
            assert_eq!(interaction.open_menu(), None);
        }

        #[rstest]
        fn stray_answer_is_ignored() {
            let mut interaction = Interaction::new();

            let intents = run(&mut interaction, vec![Gesture::DeleteAnswered(true)]);

            assert!(intents.is_empty());
        }
    }
}
