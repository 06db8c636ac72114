use eframe::egui;
use tokio::sync::mpsc;

use tictactoe_core::GameMode;

use crate::state::{ClientCommand, Screen, SharedState, UiSnapshot};

pub struct GameApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<ClientCommand>,
}

impl GameApp {
    const CELL_SIZE: f32 = 110.0;
    const GRID_SPACING: f32 = 6.0;
    const MENU_BUTTON_SIZE: [f32; 2] = [220.0, 44.0];

    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<ClientCommand>,
    ) -> Self {
        Self {
            shared_state,
            command_tx,
        }
    }

    fn send(&self, command: ClientCommand) {
        let _ = self.command_tx.send(command);
    }

    fn render_mode_select(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.heading("Tic-Tac-Toe");
            ui.add_space(40.0);

            let two_players =
                ui.add_sized(Self::MENU_BUTTON_SIZE, egui::Button::new("Two players"));
            if two_players.clicked() {
                self.send(ClientCommand::SelectMode(GameMode::TwoPlayer));
            }

            ui.add_space(12.0);

            let vs_ai = ui.add_sized(Self::MENU_BUTTON_SIZE, egui::Button::new("Play vs AI"));
            if vs_ai.clicked() {
                self.send(ClientCommand::SelectMode(GameMode::SinglePlayer));
            }
        });
    }

    fn render_game(&self, ui: &mut egui::Ui, snapshot: &UiSnapshot) {
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.heading(snapshot.status.as_str());
            ui.add_space(12.0);

            egui::Grid::new("board")
                .spacing([Self::GRID_SPACING, Self::GRID_SPACING])
                .show(ui, |ui| {
                    for row in 0..3 {
                        for col in 0..3 {
                            let index = row * 3 + col;
                            self.render_cell(ui, snapshot, index);
                        }
                        ui.end_row();
                    }
                });

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                if ui.button("Reset").clicked() {
                    self.send(ClientCommand::Reset);
                }
                if ui.button("Change mode").clicked() {
                    self.send(ClientCommand::ChangeMode);
                }
            });
        });
    }

    fn render_cell(&self, ui: &mut egui::Ui, snapshot: &UiSnapshot, index: usize) {
        let mark = snapshot.cells[index];
        let highlighted = snapshot
            .winning_line
            .is_some_and(|line| line.contains(&index));

        let text = egui::RichText::new(mark.symbol()).size(48.0);
        let mut button =
            egui::Button::new(text).min_size(egui::vec2(Self::CELL_SIZE, Self::CELL_SIZE));
        if highlighted {
            button = button.fill(egui::Color32::from_rgb(140, 200, 140));
        }

        if ui.add(button).clicked() {
            self.send(ClientCommand::CellActivated(index));
        }
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let snapshot = self.shared_state.get_snapshot();

        egui::CentralPanel::default().show(ctx, |ui| match snapshot.screen {
            Screen::ModeSelect => self.render_mode_select(ui),
            Screen::InGame(_) => self.render_game(ui, &snapshot),
        });

        // The bot moves on its own schedule; keep repainting so its mark
        // shows up without waiting for user input.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
