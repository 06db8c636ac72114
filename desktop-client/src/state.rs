use std::sync::{Arc, Mutex};

use tictactoe_core::{CELL_COUNT, GameMode, Mark};

#[derive(Debug, Clone, Copy)]
pub enum ClientCommand {
    SelectMode(GameMode),
    CellActivated(usize),
    Reset,
    ChangeMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    ModeSelect,
    InGame(GameMode),
}

/// Everything the UI thread needs to paint one frame.
#[derive(Debug, Clone)]
pub struct UiSnapshot {
    pub screen: Screen,
    pub cells: [Mark; CELL_COUNT],
    pub status: String,
    pub winning_line: Option<[usize; 3]>,
}

impl UiSnapshot {
    fn initial() -> Self {
        Self {
            screen: Screen::ModeSelect,
            cells: [Mark::Empty; CELL_COUNT],
            status: String::new(),
            winning_line: None,
        }
    }
}

/// Shared between the egui thread and the game task. The game task writes,
/// the UI reads a cloned snapshot every frame.
pub struct SharedState {
    snapshot: Arc<Mutex<UiSnapshot>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(UiSnapshot::initial())),
        }
    }

    pub fn get_snapshot(&self) -> UiSnapshot {
        self.snapshot.lock().unwrap().clone()
    }

    pub fn set_screen(&self, screen: Screen) {
        self.snapshot.lock().unwrap().screen = screen;
    }

    pub fn set_status(&self, status: String) {
        self.snapshot.lock().unwrap().status = status;
    }

    pub fn set_cell(&self, index: usize, mark: Mark) {
        let mut snapshot = self.snapshot.lock().unwrap();
        if let Some(cell) = snapshot.cells.get_mut(index) {
            *cell = mark;
        }
    }

    pub fn set_winning_line(&self, line: [usize; 3]) {
        self.snapshot.lock().unwrap().winning_line = Some(line);
    }

    pub fn clear_board(&self) {
        let mut snapshot = self.snapshot.lock().unwrap();
        snapshot.cells = [Mark::Empty; CELL_COUNT];
        snapshot.winning_line = None;
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            snapshot: Arc::clone(&self.snapshot),
        }
    }
}
