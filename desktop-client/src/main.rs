mod config;
mod game_ui;
mod local_game;
mod state;
mod view;

use clap::Parser;
use eframe::egui;
use tokio::sync::mpsc;

use tictactoe_core::logger::init_logger;

use config::load_config;
use game_ui::GameApp;
use local_game::local_game_task;
use state::SharedState;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Tic-tac-toe desktop client")]
struct Args {
    /// Path to the YAML config file
    #[arg(long, default_value = "client_config.yaml")]
    config: String,

    /// Fixed RNG seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(Some("client".to_string()));

    let config = load_config(&args.config)?;

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let shared_state_clone = shared_state.clone();
    let seed = args.seed;

    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(local_game_task(config, seed, shared_state_clone, command_rx));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 560.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|_cc| Ok(Box::new(GameApp::new(shared_state, command_tx)))),
    )?;

    Ok(())
}
