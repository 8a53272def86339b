//! The assembled board client.

use taskforge_workflow::ports::KeyValueStorage;

use crate::interaction::{Gesture, Interaction};
use crate::orchestrator::{Board, BoardView};
use crate::render::HtmlBoardView;
use crate::storage::BoardStorage;

/// Board, HTML view and gesture handling wired together.
pub struct BoardApp<K> {
    board: Board<K, HtmlBoardView>,
    interaction: Interaction,
}

impl<K: KeyValueStorage> BoardApp<K> {
    /// Boots the board from `storage` and renders it.
    pub fn boot(storage: K) -> Self {
        let board = Board::boot(BoardStorage::new(storage), HtmlBoardView::new());
        let mut interaction = Interaction::new();
        interaction.set_loading(board.view().is_loading());
        Self { board, interaction }
    }

    /// Feeds one gesture through the interaction layer and refreshes the
    /// visible menu.
    pub fn gesture(&mut self, gesture: Gesture) {
        self.interaction.handle(gesture, &mut self.board);
        self.board
            .view_mut()
            .show_menu(self.interaction.open_menu());
    }

    #[must_use]
    pub const fn board(&self) -> &Board<K, HtmlBoardView> {
        &self.board
    }

    #[must_use]
    pub const fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    #[must_use]
    pub const fn view(&self) -> &HtmlBoardView {
        self.board.view()
    }
}
