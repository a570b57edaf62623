
use super::board::Board;
use super::types::{BOARD_SIZE, Mark};
use super::win_detector::{check_win, is_board_full};

pub const AI_WIN_SCORE: i32 = 1;
pub const HUMAN_WIN_SCORE: i32 = -1;
pub const DRAW_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes_visited: u64,
}

// `is_maximizing` is true when the AI moves next.
pub fn evaluate(board: &mut Board, is_maximizing: bool) -> i32 {
    let mut stats = SearchStats::default();
    minimax(board, is_maximizing, &mut stats)
}

pub fn evaluate_with_stats(board: &mut Board, is_maximizing: bool) -> (i32, SearchStats) {
    let mut stats = SearchStats::default();
    let score = minimax(board, is_maximizing, &mut stats);
    (score, stats)
}

pub(crate) fn minimax(board: &mut Board, is_maximizing: bool, stats: &mut SearchStats) -> i32 {
    stats.nodes_visited += 1;

    if check_win(Mark::Ai, board) {
        return AI_WIN_SCORE;
    }
    if check_win(Mark::Human, board) {
        return HUMAN_WIN_SCORE;
    }
    if is_board_full(board) {
        return DRAW_SCORE;
    }

    let mover = if is_maximizing { Mark::Ai } else { Mark::Human };
    let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if !board.is_available(row, col) {
                continue;
            }

            board.place(row, col, mover);
            let score = minimax(board, !is_maximizing, stats);
            board.clear(row, col);

            best_score = if is_maximizing {
                best_score.max(score)
            } else {
                best_score.min(score)
            };
        }
    }

    best_score
}
