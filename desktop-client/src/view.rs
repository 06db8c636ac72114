use tictactoe_core::{GameView, Mark};

use crate::state::SharedState;

/// `GameView` implementation that writes into the UI's shared snapshot.
pub struct SharedStateView {
    state: SharedState,
}

impl SharedStateView {
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }
}

impl GameView for SharedStateView {
    fn show_status(&self, text: &str) {
        self.state.set_status(text.to_string());
    }

    fn mark_cell(&self, index: usize, mark: Mark) {
        self.state.set_cell(index, mark);
    }

    fn highlight_line(&self, line: [usize; 3]) {
        self.state.set_winning_line(line);
    }

    fn clear_board(&self) {
        self.state.clear_board();
    }
}
