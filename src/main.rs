mod app;
mod ui;

use anyhow::{anyhow, Context};
use clap::Parser;
use eframe::egui;

use app::ScoreImportApp;
use score_import::config::Config;
use score_import::{AppState, SqliteStore};

fn main() -> anyhow::Result<()> {
    score_import::init_logging();
    let config = Config::parse();

    // Single long-lived connection, owned by the app and dropped on exit.
    let store = SqliteStore::open(&config.database)
        .with_context(|| format!("opening database {}", config.database.display()))?;

    let mut state = AppState::default();
    if let Some(path) = &config.file {
        if let Err(e) = state.load(path) {
            log::warn!("startup file not loaded: {e}");
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Score Import",
        options,
        Box::new(move |_cc| Ok(Box::new(ScoreImportApp::new(state, store)))),
    )
    .map_err(|e| anyhow!("running viewer: {e}"))
}
