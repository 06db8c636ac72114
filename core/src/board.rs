use crate::error::InvalidMove;

pub const CELL_COUNT: usize = 9;

/// The 8 winning index triples: 3 rows, 3 columns, 2 diagonals.
/// Enumeration order is fixed; the first matching line is the one reported.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
            Mark::Empty => "",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win { winner: Mark, line: [usize; 3] },
    Draw,
}

#[derive(Clone, Debug)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    #[cfg(test)]
    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), InvalidMove> {
        if index >= CELL_COUNT {
            return Err(InvalidMove::OutOfRange { index });
        }
        if self.cells[index] != Mark::Empty {
            return Err(InvalidMove::CellOccupied { index });
        }
        self.cells[index] = mark;
        Ok(())
    }

    pub fn evaluate(&self) -> GameOutcome {
        for line in WIN_LINES {
            let first = self.cells[line[0]];
            if first == Mark::Empty {
                continue;
            }
            if self.cells[line[1]] == first && self.cells[line[2]] == first {
                return GameOutcome::Win {
                    winner: first,
                    line,
                };
            }
        }

        if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }
}
