mod colors;
mod config;
mod offline;
mod state;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::log;
use common::logger::init_logger;
use tokio::sync::mpsc;

use config::{Config, get_config_manager};
use offline::{RunnerSettings, local_game_task};
use state::SharedState;
use ui::TicTacToeApp;

#[derive(Parser, Debug)]
#[command(name = "tic_tac_toe_client")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = args.use_log_prefix.then(|| "client".to_string());
    init_logger(prefix, args.verbose);

    let config_manager = get_config_manager(args.config);
    let config = config_manager.get_config().unwrap_or_else(|e| {
        log!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    let shared_state = SharedState::new(config.last_difficulty);
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let settings = RunnerSettings {
        seed: args.seed,
        offload_ai: config.offload_ai,
    };
    let shared_state_clone = shared_state.clone();

    std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log!("Failed to start game runtime: {}", e);
                return;
            }
        };
        rt.block_on(local_game_task(
            shared_state_clone,
            command_rx,
            settings,
            config_manager,
        ));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([config::WindowConfig::MIN_SIZE, config::WindowConfig::MIN_SIZE])
            .with_title("Tic Tac Toe AI"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe AI",
        options,
        Box::new(|_cc| Ok(Box::new(TicTacToeApp::new(shared_state, command_tx)))),
    )?;

    Ok(())
}
