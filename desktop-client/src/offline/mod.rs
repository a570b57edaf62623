mod broadcaster;
mod tictactoe_runner;

pub use broadcaster::LocalBroadcaster;
pub use tictactoe_runner::{RunnerSettings, local_game_task};
