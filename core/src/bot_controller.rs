use crate::board::{Board, Mark, WIN_LINES};
use crate::session_rng::SessionRng;

/// Probability of looking for the bot's own winning move.
const WIN_SEEK_THRESHOLD: f64 = 0.4;
/// Probability ceiling for looking for a blocking move instead.
const BLOCK_SEEK_THRESHOLD: f64 = 0.8;

/// Board snapshot handed to the move selector.
pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark) -> Self {
        Self { board, bot_mark }
    }
}

/// Picks the bot's move. The selector is intentionally imperfect: one
/// uniform roll decides whether it bothers to win, to block, or just plays
/// a random empty cell. The 0.4 / 0.8 thresholds are load-bearing game
/// balance and must not change.
pub fn calculate_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let roll: f64 = rng.random();
    select_with_roll(input, roll, rng)
}

/// Roll-explicit selection seam. A roll below 0.4 that finds no completing
/// move still falls through to the block attempt; only rolls at 0.8 and
/// above skip straight to the random fallback.
pub fn select_with_roll(input: &BotInput, roll: f64, rng: &mut SessionRng) -> Option<usize> {
    let mut chosen = None;

    if roll < WIN_SEEK_THRESHOLD {
        chosen = find_completing_move(&input.board, input.bot_mark);
    }

    if chosen.is_none() && roll < BLOCK_SEEK_THRESHOLD {
        if let Some(opponent) = input.bot_mark.opponent() {
            chosen = find_completing_move(&input.board, opponent);
        }
    }

    chosen.or_else(|| rng.choose(&input.board.empty_cells()).copied())
}

/// Scans the win-line table in fixed order and returns the empty cell of
/// the first line where `mark` already holds the other two cells.
fn find_completing_move(board: &Board, mark: Mark) -> Option<usize> {
    for line in WIN_LINES {
        let marks = [board.cell(line[0]), board.cell(line[1]), board.cell(line[2])];
        let own = marks.iter().filter(|&&cell| cell == Some(mark)).count();
        let empty = marks
            .iter()
            .position(|&cell| cell == Some(Mark::Empty));

        if own == 2 {
            if let Some(slot) = empty {
                return Some(line[slot]);
            }
        }
    }
    None
}
