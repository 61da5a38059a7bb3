use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use score_import::data::model::COLUMNS;
use score_import::{AppState, Score};

// ---------------------------------------------------------------------------
// Score grid (central panel)
// ---------------------------------------------------------------------------

/// Render the visible records, one row each, columns in file order.
pub fn score_table(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No scores loaded");
        });
        return;
    }

    let rows: Vec<&Score> = state.visible().collect();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().at_least(60.0), COLUMNS.len())
        .header(20.0, |mut header| {
            for name in COLUMNS {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let score = rows[row.index()];
                for cell in cells(score) {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}

/// Display text per column. Absent scores render as empty cells.
fn cells(score: &Score) -> [String; 12] {
    let opt = |v: Option<f64>| v.map(|x| x.to_string()).unwrap_or_default();
    [
        score.id.to_string(),
        opt(score.math),
        opt(score.literature),
        opt(score.physics),
        opt(score.biology),
        opt(score.foreign_language),
        score.year.to_string(),
        opt(score.chemistry),
        opt(score.history),
        opt(score.geography),
        opt(score.civic_education),
        score.region_code.to_string(),
    ]
}
