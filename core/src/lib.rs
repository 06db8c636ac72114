pub mod board;
pub mod bot_controller;
pub mod error;
pub mod game_state;
pub mod logger;
pub mod session;
pub mod session_rng;
pub mod settings;
pub mod view;

pub use board::{Board, CELL_COUNT, GameOutcome, Mark, WIN_LINES};
pub use error::InvalidMove;
pub use game_state::{BOT_MARK, GameMode, GameState, GameStatus, HUMAN_MARK};
pub use session::GameSession;
pub use session_rng::SessionRng;
pub use settings::SessionSettings;
pub use view::GameView;
