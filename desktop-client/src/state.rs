use std::sync::{Arc, Mutex, MutexGuard};

use common::games::tictactoe::{Board, Difficulty, Outcome, WinningLine};

#[derive(Debug, Clone)]
pub enum ClientCommand {
    SelectDifficulty(Difficulty),
    PlaceMark { row: usize, col: usize },
    Restart,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    DifficultySelection,
    InGame {
        board: Board,
        ai_thinking: bool,
    },
    GameOver {
        board: Board,
        outcome: Outcome,
        winning_line: Option<WinningLine>,
    },
}

#[derive(Clone)]
pub struct SharedState {
    state: Arc<Mutex<AppState>>,
    last_difficulty: Arc<Mutex<Option<Difficulty>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

impl SharedState {
    pub fn new(last_difficulty: Option<Difficulty>) -> Self {
        Self {
            state: Arc::new(Mutex::new(AppState::DifficultySelection)),
            last_difficulty: Arc::new(Mutex::new(last_difficulty)),
        }
    }

    pub fn set_state(&self, state: AppState) {
        *lock(&self.state) = state;
    }

    pub fn get_state(&self) -> AppState {
        lock(&self.state).clone()
    }

    pub fn update_board(&self, board: Board) {
        let mut state = lock(&self.state);
        match &mut *state {
            AppState::InGame { board: current, .. } => *current = board,
            _ => {
                *state = AppState::InGame {
                    board,
                    ai_thinking: false,
                }
            }
        }
    }

    pub fn set_ai_thinking(&self, thinking: bool) {
        if let AppState::InGame { ai_thinking, .. } = &mut *lock(&self.state) {
            *ai_thinking = thinking;
        }
    }

    pub fn set_last_difficulty(&self, difficulty: Difficulty) {
        *lock(&self.last_difficulty) = Some(difficulty);
    }

    pub fn last_difficulty(&self) -> Option<Difficulty> {
        *lock(&self.last_difficulty)
    }
}
