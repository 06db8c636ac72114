use std::fmt;

/// The single rejection class of the game core. Callers log and drop it;
/// nothing here is fatal and nothing reaches the end user as an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidMove {
    OutOfRange { index: usize },
    CellOccupied { index: usize },
    GameOver,
    BotBusy,
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMove::OutOfRange { index } => {
                write!(f, "Cell index {} is out of range", index)
            }
            InvalidMove::CellOccupied { index } => {
                write!(f, "Cell {} is already marked", index)
            }
            InvalidMove::GameOver => write!(f, "Game is already over"),
            InvalidMove::BotBusy => write!(f, "Bot move is pending"),
        }
    }
}

impl std::error::Error for InvalidMove {}
