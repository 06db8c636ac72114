use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::board::{Board, Mark};
use crate::bot_controller::{BotInput, calculate_move};
use crate::error::InvalidMove;
use crate::game_state::{BOT_MARK, GameMode, GameState, GameStatus};
use crate::log;
use crate::session_rng::SessionRng;
use crate::settings::SessionSettings;
use crate::view::GameView;

struct SessionInner {
    game: GameState,
    bot_busy: bool,
    generation: u64,
}

/// One game session: the state machine plus the deferred bot turn.
///
/// Cheap to clone; every clone shares the same game. The generation counter
/// invalidates bot turns scheduled before a reset, so a stale move can
/// never land on a fresh board.
#[derive(Clone)]
pub struct GameSession {
    mode: GameMode,
    settings: SessionSettings,
    inner: Arc<Mutex<SessionInner>>,
    rng: Arc<Mutex<SessionRng>>,
    view: Arc<dyn GameView>,
}

impl GameSession {
    pub fn new(
        mode: GameMode,
        settings: SessionSettings,
        rng: SessionRng,
        view: Arc<dyn GameView>,
    ) -> Self {
        Self {
            mode,
            settings,
            inner: Arc::new(Mutex::new(SessionInner {
                game: GameState::new(),
                bot_busy: false,
                generation: 0,
            })),
            rng: Arc::new(Mutex::new(rng)),
            view,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Sole entry point for human-originated moves. Rejections are returned
    /// for logging and tests but carry no user-visible effect.
    pub async fn handle_cell_activation(&self, index: usize) -> Result<(), InvalidMove> {
        let mut inner = self.inner.lock().await;

        if inner.bot_busy {
            return Err(InvalidMove::BotBusy);
        }

        let mark = inner.game.current_mark();
        inner.game.place_mark(index)?;

        self.view.mark_cell(index, mark);
        self.push_status(&inner.game);
        if let Some(line) = inner.game.winning_line() {
            self.view.highlight_line(line);
        }

        if self.mode == GameMode::SinglePlayer
            && inner.game.is_active()
            && inner.game.current_mark() == BOT_MARK
        {
            inner.bot_busy = true;
            let generation = inner.generation;
            drop(inner);
            self.spawn_bot_turn(generation);
        }

        Ok(())
    }

    /// Clears the board, restores the initial turn state and status text,
    /// and invalidates any pending bot turn.
    pub async fn reset(&self) {
        let mut inner = self.inner.lock().await;
        inner.generation += 1;
        inner.bot_busy = false;
        inner.game = GameState::new();

        self.view.clear_board();
        self.push_status(&inner.game);
    }

    fn spawn_bot_turn(&self, generation: u64) {
        let session = self.clone();
        let delay = Duration::from_millis(self.settings.bot_delay_ms);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            session.finish_bot_turn(generation).await;
        });
    }

    async fn finish_bot_turn(&self, generation: u64) {
        let mut inner = self.inner.lock().await;

        if inner.generation != generation {
            log!("Discarding bot move scheduled before a reset");
            return;
        }

        inner.bot_busy = false;

        if !inner.game.is_active() || inner.game.current_mark() != BOT_MARK {
            return;
        }

        let input = BotInput::new(inner.game.board().clone(), BOT_MARK);
        let chosen = {
            let mut rng = self.rng.lock().await;
            calculate_move(&input, &mut rng)
        };

        let Some(index) = chosen else {
            return;
        };

        match inner.game.place_mark(index) {
            Ok(()) => {
                self.view.mark_cell(index, BOT_MARK);
                self.push_status(&inner.game);
                if let Some(line) = inner.game.winning_line() {
                    self.view.highlight_line(line);
                }
            }
            Err(e) => {
                log!("Bot failed to place mark at {}: {}", index, e);
            }
        }
    }

    fn push_status(&self, game: &GameState) {
        self.view.show_status(&game.status_message(self.mode));
    }

    pub async fn board(&self) -> Board {
        self.inner.lock().await.game.board().clone()
    }

    pub async fn status(&self) -> GameStatus {
        self.inner.lock().await.game.status()
    }

    pub async fn current_mark(&self) -> Mark {
        self.inner.lock().await.game.current_mark()
    }

    pub async fn is_bot_busy(&self) -> bool {
        self.inner.lock().await.bot_busy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex as StdMutex;

    #[derive(Default)]
    struct RecordingView {
        statuses: StdMutex<Vec<String>>,
        marks: StdMutex<Vec<(usize, Mark)>>,
        highlights: StdMutex<Vec<[usize; 3]>>,
        clears: StdMutex<usize>,
    }

    impl RecordingView {
        fn last_status(&self) -> Option<String> {
            self.statuses.lock().unwrap().last().cloned()
        }

        fn mark_count(&self) -> usize {
            self.marks.lock().unwrap().len()
        }
    }

    impl GameView for RecordingView {
        fn show_status(&self, text: &str) {
            self.statuses.lock().unwrap().push(text.to_string());
        }

        fn mark_cell(&self, index: usize, mark: Mark) {
            self.marks.lock().unwrap().push((index, mark));
        }

        fn highlight_line(&self, line: [usize; 3]) {
            self.highlights.lock().unwrap().push(line);
        }

        fn clear_board(&self) {
            *self.clears.lock().unwrap() += 1;
        }
    }

    const TEST_SETTINGS: SessionSettings = SessionSettings { bot_delay_ms: 50 };

    fn make_session(mode: GameMode) -> (GameSession, Arc<RecordingView>) {
        let view = Arc::new(RecordingView::default());
        let session = GameSession::new(mode, TEST_SETTINGS, SessionRng::new(7), view.clone());
        (session, view)
    }

    #[tokio::test]
    async fn test_two_player_move_updates_view() {
        let (session, view) = make_session(GameMode::TwoPlayer);

        session.handle_cell_activation(0).await.unwrap();

        assert_eq!(view.marks.lock().unwrap().as_slice(), &[(0, Mark::X)]);
        assert_eq!(view.last_status(), Some("Player O's turn".to_string()));
        assert!(!session.is_bot_busy().await);
    }

    #[tokio::test]
    async fn test_two_player_win_highlights_line_and_freezes_game() {
        let (session, view) = make_session(GameMode::TwoPlayer);

        for index in [0, 4, 1, 7, 2] {
            session.handle_cell_activation(index).await.unwrap();
        }

        assert_eq!(view.highlights.lock().unwrap().as_slice(), &[[0, 1, 2]]);
        assert_eq!(view.last_status(), Some("Player X wins!".to_string()));
        assert_eq!(
            session.handle_cell_activation(5).await,
            Err(InvalidMove::GameOver)
        );
    }

    #[tokio::test]
    async fn test_occupied_cell_is_rejected_without_side_effects() {
        let (session, view) = make_session(GameMode::TwoPlayer);

        session.handle_cell_activation(4).await.unwrap();
        assert_eq!(
            session.handle_cell_activation(4).await,
            Err(InvalidMove::CellOccupied { index: 4 })
        );

        assert_eq!(view.mark_count(), 1);
        assert_eq!(session.current_mark().await, Mark::O);
    }

    #[tokio::test(start_paused = true)]
    async fn test_bot_turn_blocks_input_then_fires_once() {
        let (session, view) = make_session(GameMode::SinglePlayer);

        session.handle_cell_activation(0).await.unwrap();
        assert!(session.is_bot_busy().await);
        assert_eq!(view.last_status(), Some("AI is thinking...".to_string()));

        // Activation during the thinking window is rejected.
        assert_eq!(
            session.handle_cell_activation(1).await,
            Err(InvalidMove::BotBusy)
        );

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(!session.is_bot_busy().await);
        assert_eq!(view.mark_count(), 2);
        let board = session.board().await;
        let bot_marks = board.cells().iter().filter(|&&c| c == Mark::O).count();
        assert_eq!(bot_marks, 1);
        assert_eq!(view.last_status(), Some("Your turn".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_invalidates_pending_bot_move() {
        let (session, view) = make_session(GameMode::SinglePlayer);

        session.handle_cell_activation(0).await.unwrap();
        session.reset().await;

        tokio::time::sleep(Duration::from_millis(200)).await;

        let board = session.board().await;
        assert!(board.cells().iter().all(|&c| c == Mark::Empty));
        assert!(!session.is_bot_busy().await);
        assert_eq!(*view.clears.lock().unwrap(), 1);
        assert_eq!(view.last_status(), Some("Your turn".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_restores_initial_state() {
        let (session, view) = make_session(GameMode::TwoPlayer);

        for index in [0, 4, 1, 7, 2] {
            session.handle_cell_activation(index).await.unwrap();
        }
        session.reset().await;

        assert_eq!(session.status().await, GameStatus::InProgress);
        assert_eq!(session.current_mark().await, Mark::X);
        assert_eq!(view.last_status(), Some("Player X's turn".to_string()));
        assert!(!session.is_bot_busy().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_game_continues_after_bot_move() {
        let (session, _view) = make_session(GameMode::SinglePlayer);

        session.handle_cell_activation(4).await.unwrap();
        tokio::time::sleep(Duration::from_millis(200)).await;

        // Back to the human with both marks on the board.
        assert_eq!(session.current_mark().await, Mark::X);
        let board = session.board().await;
        assert_eq!(board.empty_cells().len(), 7);
        session
            .handle_cell_activation(board.empty_cells()[0])
            .await
            .unwrap();
    }
}
