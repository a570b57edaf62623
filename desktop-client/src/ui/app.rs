use std::time::Duration;

use common::log;
use tokio::sync::mpsc;

use crate::colors;
use crate::state::{AppState, ClientCommand, SharedState};

use super::game::TicTacToeGameUi;
use super::menu::DifficultyMenu;

pub struct TicTacToeApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<ClientCommand>,
    game_ui: TicTacToeGameUi,
}

impl TicTacToeApp {
    pub fn new(shared_state: SharedState, command_tx: mpsc::UnboundedSender<ClientCommand>) -> Self {
        Self {
            shared_state,
            command_tx,
            game_ui: TicTacToeGameUi::new(),
        }
    }

    fn send(&self, command: ClientCommand) {
        if self.command_tx.send(command).is_err() {
            log!("Game task is gone, dropping command");
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::R)) {
            self.send(ClientCommand::Restart);
        }

        let state = self.shared_state.get_state();
        let last_difficulty = self.shared_state.last_difficulty();

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(colors::BACKGROUND))
            .show(ctx, |ui| match state {
                AppState::DifficultySelection => {
                    if let Some(difficulty) = DifficultyMenu::render(ui, last_difficulty) {
                        self.send(ClientCommand::SelectDifficulty(difficulty));
                    }
                }
                AppState::InGame { board, ai_thinking } => {
                    if let Some(cell) = self.game_ui.render_game(ui, &board, ai_thinking) {
                        self.send(ClientCommand::PlaceMark {
                            row: cell.row,
                            col: cell.col,
                        });
                    }
                }
                AppState::GameOver {
                    board,
                    outcome,
                    winning_line,
                } => {
                    self.game_ui.render_game_over(ui, &board, outcome, winning_line);
                }
            });

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
