use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};
use common::games::SessionRng;
use common::games::tictactoe::{
    Difficulty, GameError, GamePhase, TicTacToeSession, calculate_minimax_move,
};
use common::{log, log_debug};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::state::{ClientCommand, SharedState};

use super::LocalBroadcaster;

type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub struct RunnerSettings {
    pub seed: Option<u64>,
    pub offload_ai: bool,
}

pub async fn local_game_task(
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
    settings: RunnerSettings,
    config_manager: ClientConfigManager,
) {
    let rng = match settings.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let mut session = TicTacToeSession::new(LocalBroadcaster::new(shared_state.clone()), rng);
    session.start();

    while let Some(command) = command_rx.recv().await {
        match command {
            ClientCommand::SelectDifficulty(difficulty) => {
                if session.set_difficulty(difficulty).is_ok() {
                    shared_state.set_last_difficulty(difficulty);
                    remember_difficulty(&config_manager, difficulty);
                }
            }
            ClientCommand::PlaceMark { row, col } => {
                if session.human_click(row, col).is_err() {
                    continue;
                }
                if session.phase() != GamePhase::AwaitingAiMove {
                    continue;
                }
                let restart_pending = if settings.offload_ai {
                    play_ai_turn_on_worker(&mut session, &shared_state, &mut command_rx).await
                } else {
                    play_ai_turn_inline(&mut session);
                    false
                };
                if restart_pending {
                    session.restart_requested();
                }
            }
            ClientCommand::Restart => session.restart_requested(),
        }
    }

    log!("Command channel closed, game task stopping");
}

// Clicks that arrive while the worker runs are dropped; a restart is
// returned to the caller and applied after the move lands.
async fn play_ai_turn_on_worker(
    session: &mut TicTacToeSession<LocalBroadcaster>,
    shared_state: &SharedState,
    command_rx: &mut mpsc::UnboundedReceiver<ClientCommand>,
) -> bool {
    if session.game_state().difficulty() != Some(Difficulty::Hard) {
        play_ai_turn_inline(session);
        return false;
    }

    let board = *session.game_state().board();
    shared_state.set_ai_thinking(true);
    let mut worker = tokio::task::spawn_blocking(move || calculate_minimax_move(&board));
    let mut restart_pending = false;

    let result = loop {
        tokio::select! {
            biased;
            Some(command) = command_rx.recv() => match command {
                ClientCommand::Restart => restart_pending = true,
                other => log_debug!("Ignoring {:?} while the AI is thinking", other),
            },
            result = &mut worker => break result,
        }
    };
    shared_state.set_ai_thinking(false);

    match result {
        Ok(Some(pos)) => {
            if let Err(e) = session.apply_ai_move(pos) {
                log_debug!("AI move {} discarded: {}", pos, e);
            }
        }
        Ok(None) => log!("AI found no move, game ends in a draw"),
        Err(e) => log!("AI worker failed: {}", e),
    }

    restart_pending
}

fn play_ai_turn_inline(session: &mut TicTacToeSession<LocalBroadcaster>) {
    match session.play_ai_turn() {
        Ok(_) | Err(GameError::NoMovesAvailable) => {}
        Err(e) => log_debug!("AI turn not played: {}", e),
    }
}

fn remember_difficulty(config_manager: &ClientConfigManager, difficulty: Difficulty) {
    let mut config = match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to read config: {}", e);
            return;
        }
    };
    if config.last_difficulty == Some(difficulty) {
        return;
    }
    config.last_difficulty = Some(difficulty);
    if let Err(e) = config_manager.set_config(&config) {
        log!("Failed to save config: {}", e);
    }
}
