use eframe::egui::{self, Color32, RichText, Ui};

use score_import::state::Status;
use score_import::{AppState, ScoreStore, YearSelection};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Browse / Import / Clear buttons, the file path and the year selector.
pub fn top_bar<S: ScoreStore>(ui: &mut Ui, state: &mut AppState, store: &mut S) {
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Browse…").clicked() {
            open_file_dialog(state);
        }

        let path_text = state
            .source_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        ui.label(path_text);

        ui.separator();

        let can_import = !state.dataset.is_empty() && !state.busy;
        if ui.add_enabled(can_import, egui::Button::new("Import")).clicked() {
            // Errors are logged and surfaced through the status line.
            let _ = state.import(store);
        }

        if ui.button("Clear").clicked() {
            state.clear();
        }

        ui.separator();
        year_selector(ui, state);

        ui.separator();
        ui.label(format!(
            "{} records loaded, {} visible",
            state.dataset.len(),
            state.visible_indices.len()
        ));
    });
}

fn year_selector(ui: &mut Ui, state: &mut AppState) {
    ui.label("Year");

    let years = state.dataset.years.clone();
    let current = state.selection;
    let mut picked = None;

    egui::ComboBox::from_id_salt("year_filter")
        .selected_text(current.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current == YearSelection::All, "All")
                .clicked()
            {
                picked = Some(YearSelection::All);
            }
            for year in years {
                let option = YearSelection::Year(year);
                if ui
                    .selectable_label(current == option, year.to_string())
                    .clicked()
                {
                    picked = Some(option);
                }
            }
        });

    if let Some(selection) = picked {
        state.set_year(selection);
    }
}

// ---------------------------------------------------------------------------
// Status bar
// ---------------------------------------------------------------------------

pub fn status_bar(ui: &mut Ui, state: &AppState) {
    match &state.status_message {
        Some(Status::Info(msg)) => {
            ui.label(msg);
        }
        Some(Status::Error(msg)) => {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
        None => {
            ui.label("Open a CSV file to begin (Browse…)");
        }
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open score file")
        .add_filter("CSV Files", &["csv"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        // Failures are already logged and stored in the status line.
        let _ = state.load(&path);
    }
}
