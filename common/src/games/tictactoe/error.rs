use super::types::{GamePhase, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidCell(Position),
    OutOfBounds { row: usize, col: usize },
    EmptyMark,
    NoMovesAvailable,
    NotAcceptingMoves(GamePhase),
    DifficultyAlreadySelected,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidCell(pos) => write!(f, "Cell {} is already marked", pos),
            GameError::OutOfBounds { row, col } => {
                write!(f, "Position ({}, {}) is outside the board", row, col)
            }
            GameError::EmptyMark => write!(f, "Cannot place an empty mark"),
            GameError::NoMovesAvailable => write!(f, "No moves available, board is full"),
            GameError::NotAcceptingMoves(phase) => {
                write!(f, "Move rejected while {}", phase)
            }
            GameError::DifficultyAlreadySelected => {
                write!(f, "Difficulty can only be chosen before the game starts")
            }
        }
    }
}

impl std::error::Error for GameError {}
