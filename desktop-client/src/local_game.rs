use std::sync::Arc;
use tokio::sync::mpsc;

use tictactoe_core::{GameSession, SessionRng, log};

use crate::config::ClientConfig;
use crate::state::{ClientCommand, Screen, SharedState};
use crate::view::SharedStateView;

/// The game task: owns the session, receives UI commands, pushes view
/// updates back through `SharedState`.
pub async fn local_game_task(
    config: ClientConfig,
    seed: Option<u64>,
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
) {
    let mut session: Option<GameSession> = None;

    loop {
        let Some(command) = command_rx.recv().await else {
            break;
        };

        match command {
            ClientCommand::SelectMode(mode) => {
                let rng = match seed {
                    Some(seed) => SessionRng::new(seed),
                    None => SessionRng::from_random(),
                };
                log!("Starting {:?} game with seed {}", mode, rng.seed());

                let view = Arc::new(SharedStateView::new(shared_state.clone()));
                let new_session =
                    GameSession::new(mode, config.session_settings(), rng, view);
                new_session.reset().await;

                shared_state.set_screen(Screen::InGame(mode));
                session = Some(new_session);
            }

            ClientCommand::CellActivated(index) => {
                if let Some(ref current) = session {
                    if let Err(e) = current.handle_cell_activation(index).await {
                        log!("Rejected move at cell {}: {}", index, e);
                    }
                }
            }

            ClientCommand::Reset => {
                if let Some(ref current) = session {
                    current.reset().await;
                }
            }

            ClientCommand::ChangeMode => {
                // Reset before dropping so a pending bot move can never
                // land on the next session's board.
                if let Some(current) = session.take() {
                    current.reset().await;
                }
                shared_state.clear_board();
                shared_state.set_screen(Screen::ModeSelect);
            }
        }
    }
}
