pub mod config;
pub mod data;
pub mod error;
pub mod state;
pub mod store;

pub use data::model::{Score, ScoreDataset, YearSelection};
pub use error::{LoadError, ParseError, SessionError, StoreError};
pub use state::AppState;
pub use store::{ScoreStore, SqliteStore};

use std::sync::OnceLock;

use log::LevelFilter;

static LOGGER: OnceLock<()> = OnceLock::new();

/// Install `env_logger` once. Defaults to `info` for this crate when
/// `RUST_LOG` is unset.
pub fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if std::env::var("RUST_LOG").is_err() {
            builder.filter_module("score_import", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}
