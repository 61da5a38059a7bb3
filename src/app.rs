use eframe::egui;

use score_import::{AppState, SqliteStore};

use crate::ui::{grid, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ScoreImportApp {
    pub state: AppState,
    pub store: SqliteStore,
}

impl ScoreImportApp {
    pub fn new(state: AppState, store: SqliteStore) -> Self {
        Self { state, store }
    }
}

impl eframe::App for ScoreImportApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: file, import, clear ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, &mut self.store);
        });

        // ---- Bottom panel: status line ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &self.state);
        });

        // ---- Central panel: score grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            grid::score_table(ui, &self.state);
        });
    }
}
