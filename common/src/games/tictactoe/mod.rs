mod board;
mod bot_controller;
mod error;
mod game_state;
mod minimax;
mod session;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{calculate_minimax_move, calculate_move, select_move};
pub use error::GameError;
pub use game_state::TicTacToeGameState;
pub use minimax::{
    AI_WIN_SCORE, DRAW_SCORE, HUMAN_WIN_SCORE, SearchStats, evaluate, evaluate_with_stats,
};
pub use session::TicTacToeSession;
pub use types::{BOARD_SIZE, Difficulty, GamePhase, Mark, Outcome, Position, WinningLine};
pub use win_detector::{check_win, check_win_with_line, is_board_full, outcome};
