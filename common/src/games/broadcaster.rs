use super::tictactoe::{Board, Outcome, WinningLine};

pub trait GameBroadcaster {
    fn on_board_changed(&self, board: &Board);

    fn on_game_over(&self, outcome: Outcome, winning_line: Option<WinningLine>);

    fn on_difficulty_menu_requested(&self);
}
