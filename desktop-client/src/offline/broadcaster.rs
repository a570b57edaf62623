use common::games::GameBroadcaster;
use common::games::tictactoe::{Board, Outcome, WinningLine};

use crate::state::{AppState, SharedState};

#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameBroadcaster for LocalBroadcaster {
    fn on_board_changed(&self, board: &Board) {
        self.shared_state.update_board(*board);
    }

    fn on_game_over(&self, outcome: Outcome, winning_line: Option<WinningLine>) {
        let board = match self.shared_state.get_state() {
            AppState::InGame { board, .. } | AppState::GameOver { board, .. } => board,
            AppState::DifficultySelection => Board::new(),
        };
        self.shared_state.set_state(AppState::GameOver {
            board,
            outcome,
            winning_line,
        });
    }

    fn on_difficulty_menu_requested(&self) {
        self.shared_state.set_state(AppState::DifficultySelection);
    }
}
