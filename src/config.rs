use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Load exam score CSV files and import them into SQLite", long_about = None)]
pub struct Config {
    /// SQLite database holding the `scores` table
    #[arg(
        long,
        env = "SCORE_IMPORT_DB",
        default_value = "high_school_scores.db"
    )]
    pub database: PathBuf,

    /// CSV file to load at startup
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}
