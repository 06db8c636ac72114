use crate::board::{Board, GameOutcome, Mark};
use crate::error::InvalidMove;

/// The human always plays X in single-player mode; X always moves first.
pub const HUMAN_MARK: Mark = Mark::X;
pub const BOT_MARK: Mark = Mark::O;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    TwoPlayer,
    SinglePlayer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    winning_line: Option<[usize; 3]>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winning_line
    }

    pub fn is_active(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// Places the current player's mark and resolves the turn. The turn only
    /// toggles when the game continues; terminal states freeze it.
    pub fn place_mark(&mut self, index: usize) -> Result<(), InvalidMove> {
        if self.status != GameStatus::InProgress {
            return Err(InvalidMove::GameOver);
        }

        self.board.place(index, self.current_mark)?;

        match self.board.evaluate() {
            GameOutcome::Win { winner, line } => {
                self.status = GameStatus::Won(winner);
                self.winning_line = Some(line);
            }
            GameOutcome::Draw => {
                self.status = GameStatus::Draw;
            }
            GameOutcome::InProgress => {
                self.switch_turn();
            }
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }

    pub fn status_message(&self, mode: GameMode) -> String {
        match (self.status, mode) {
            (GameStatus::InProgress, GameMode::TwoPlayer) => {
                format!("Player {}'s turn", self.current_mark.symbol())
            }
            (GameStatus::InProgress, GameMode::SinglePlayer) => {
                if self.current_mark == HUMAN_MARK {
                    "Your turn".to_string()
                } else {
                    "AI is thinking...".to_string()
                }
            }
            (GameStatus::Won(mark), GameMode::TwoPlayer) => {
                format!("Player {} wins!", mark.symbol())
            }
            (GameStatus::Won(mark), GameMode::SinglePlayer) => {
                if mark == HUMAN_MARK {
                    "You win!".to_string()
                } else {
                    "AI wins!".to_string()
                }
            }
            (GameStatus::Draw, _) => "Draw!".to_string(),
        }
    }
}
