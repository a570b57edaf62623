use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::select_move;
use super::error::GameError;
use super::types::{Difficulty, GamePhase, Mark, Outcome, Position};
use super::win_detector::outcome;

#[derive(Debug, Clone, Default)]
pub struct TicTacToeGameState {
    board: Board,
    difficulty: Option<Difficulty>,
    last_move: Option<(Mark, Position)>,
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn last_move(&self) -> Option<(Mark, Position)> {
        self.last_move
    }

    pub fn moves_played(&self) -> usize {
        self.board.occupied_count()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        outcome(&self.board)
    }

    pub fn phase(&self) -> GamePhase {
        if self.difficulty.is_none() {
            return GamePhase::AwaitingDifficultySelection;
        }
        if let Some(outcome) = self.outcome() {
            return GamePhase::Terminal(outcome);
        }
        // Human always opens, so equal counts mean it is the human's turn.
        if self.board.count(Mark::Human) == self.board.count(Mark::Ai) {
            GamePhase::AwaitingHumanMove
        } else {
            GamePhase::AwaitingAiMove
        }
    }

    pub fn current_turn(&self) -> Option<Mark> {
        match self.phase() {
            GamePhase::AwaitingHumanMove => Some(Mark::Human),
            GamePhase::AwaitingAiMove => Some(Mark::Ai),
            _ => None,
        }
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> Result<(), GameError> {
        if self.difficulty.is_some() {
            return Err(GameError::DifficultyAlreadySelected);
        }
        self.board.reset();
        self.last_move = None;
        self.difficulty = Some(difficulty);
        Ok(())
    }

    pub fn place_human_mark(&mut self, pos: Position) -> Result<(), GameError> {
        self.expect_phase(GamePhase::AwaitingHumanMove)?;
        self.board.mark(pos, Mark::Human)?;
        self.last_move = Some((Mark::Human, pos));
        Ok(())
    }

    pub fn play_ai_turn(&mut self, rng: &mut SessionRng) -> Result<Position, GameError> {
        let difficulty = self
            .difficulty
            .ok_or(GameError::NotAcceptingMoves(GamePhase::AwaitingDifficultySelection))?;
        if self.board.is_full() {
            return Err(GameError::NoMovesAvailable);
        }
        self.expect_phase(GamePhase::AwaitingAiMove)?;

        let pos = select_move(&mut self.board, difficulty, rng)?;
        self.last_move = Some((Mark::Ai, pos));
        Ok(pos)
    }

    pub fn apply_ai_move(&mut self, pos: Position) -> Result<(), GameError> {
        self.expect_phase(GamePhase::AwaitingAiMove)?;
        self.board.mark(pos, Mark::Ai)?;
        self.last_move = Some((Mark::Ai, pos));
        Ok(())
    }

    pub fn restart(&mut self) {
        self.board.reset();
        self.difficulty = None;
        self.last_move = None;
    }

    fn expect_phase(&self, expected: GamePhase) -> Result<(), GameError> {
        let phase = self.phase();
        if phase != expected {
            return Err(GameError::NotAcceptingMoves(phase));
        }
        Ok(())
    }
}
