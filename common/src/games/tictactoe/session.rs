use crate::games::{GameBroadcaster, SessionRng};
use crate::{log, log_debug};
use super::error::GameError;
use super::game_state::TicTacToeGameState;
use super::types::{Difficulty, GamePhase, Position};
use super::win_detector::check_win_with_line;

pub struct TicTacToeSession<B: GameBroadcaster> {
    game_state: TicTacToeGameState,
    rng: SessionRng,
    broadcaster: B,
}

impl<B: GameBroadcaster> TicTacToeSession<B> {
    pub fn new(broadcaster: B, rng: SessionRng) -> Self {
        Self {
            game_state: TicTacToeGameState::new(),
            rng,
            broadcaster,
        }
    }

    pub fn game_state(&self) -> &TicTacToeGameState {
        &self.game_state
    }

    pub fn phase(&self) -> GamePhase {
        self.game_state.phase()
    }

    pub fn broadcaster(&self) -> &B {
        &self.broadcaster
    }

    pub fn start(&self) {
        log!("Session started with seed {}", self.rng.seed());
        self.broadcaster.on_difficulty_menu_requested();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), GameError> {
        if let Err(e) = self.game_state.select_difficulty(difficulty) {
            log!("Difficulty {} ignored: {}", difficulty, e);
            return Err(e);
        }
        log!("Difficulty set to {}", difficulty);
        self.broadcaster.on_board_changed(self.game_state.board());
        Ok(())
    }

    pub fn human_click(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        let pos = Position::new(row, col);
        if let Err(e) = self.game_state.place_human_mark(pos) {
            log_debug!("Click at {} ignored: {}", pos, e);
            return Err(e);
        }
        log!("Human marked {}", pos);
        self.broadcaster.on_board_changed(self.game_state.board());
        self.notify_if_over();
        Ok(())
    }

    pub fn handle_human_click(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        self.human_click(row, col)?;
        if self.phase() == GamePhase::AwaitingAiMove {
            self.play_ai_turn()?;
        }
        Ok(())
    }

    pub fn play_ai_turn(&mut self) -> Result<Position, GameError> {
        match self.game_state.play_ai_turn(&mut self.rng) {
            Ok(pos) => {
                self.after_ai_move(pos);
                Ok(pos)
            }
            Err(GameError::NoMovesAvailable) => {
                log!("AI has no move left, game ends in a draw");
                Err(GameError::NoMovesAvailable)
            }
            Err(e) => {
                log!("AI turn skipped: {}", e);
                Err(e)
            }
        }
    }

    pub fn apply_ai_move(&mut self, pos: Position) -> Result<(), GameError> {
        if let Err(e) = self.game_state.apply_ai_move(pos) {
            log!("AI move {} rejected: {}", pos, e);
            return Err(e);
        }
        self.after_ai_move(pos);
        Ok(())
    }

    pub fn restart_requested(&mut self) {
        log!("Restart requested after {} moves", self.game_state.moves_played());
        self.game_state.restart();
        self.broadcaster.on_board_changed(self.game_state.board());
        self.broadcaster.on_difficulty_menu_requested();
    }

    fn after_ai_move(&self, pos: Position) {
        log!("AI marked {}", pos);
        self.broadcaster.on_board_changed(self.game_state.board());
        self.notify_if_over();
    }

    fn notify_if_over(&self) {
        if let GamePhase::Terminal(outcome) = self.phase() {
            let winning_line = check_win_with_line(self.game_state.board());
            log!("Game over: {} ({})", outcome, self.game_state.board());
            self.broadcaster.on_game_over(outcome, winning_line);
        }
    }
}
