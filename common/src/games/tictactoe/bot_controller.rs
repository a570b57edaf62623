use crate::games::SessionRng;
use crate::log_debug;
use super::board::Board;
use super::error::GameError;
use super::minimax::{SearchStats, minimax};
use super::types::{Difficulty, Mark, Position};

pub fn calculate_move(
    difficulty: Difficulty,
    board: &Board,
    rng: &mut SessionRng,
) -> Option<Position> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng),
        Difficulty::Hard => calculate_minimax_move(board),
    }
}

pub fn select_move(
    board: &mut Board,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<Position, GameError> {
    let pos = calculate_move(difficulty, board, rng).ok_or(GameError::NoMovesAvailable)?;
    board.mark(pos, Mark::Ai)?;
    Ok(pos)
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = board.available_moves();
    rng.pick_index(available_moves.len()).map(|idx| available_moves[idx])
}

// Ties go to the earliest cell in row-major order.
pub fn calculate_minimax_move(board: &Board) -> Option<Position> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return None;
    }

    let mut board = *board;
    let mut stats = SearchStats::default();
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for pos in available_moves {
        board.place(pos.row, pos.col, Mark::Ai);
        let score = minimax(&mut board, false, &mut stats);
        board.clear(pos.row, pos.col);

        if score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
    }

    log_debug!(
        "Minimax searched {} nodes, best score {} at {:?}",
        stats.nodes_visited,
        best_score,
        best_move
    );

    best_move
}
