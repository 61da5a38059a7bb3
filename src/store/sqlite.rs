use std::path::Path;

use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::data::model::Score;
use crate::error::StoreError;

use super::{ScoreStore, UpsertBatch};

const CREATE_SCORES: &str = "CREATE TABLE IF NOT EXISTS scores(
    id INTEGER PRIMARY KEY,
    math REAL,
    literature REAL,
    physics REAL,
    biology REAL,
    foreign_language REAL,
    year INTEGER NOT NULL,
    chemistry REAL,
    history REAL,
    geography REAL,
    civic_education REAL,
    region_code INTEGER NOT NULL DEFAULT 0
)";

const SELECT_COLUMNS: &str = "id, math, literature, physics, biology, foreign_language, year, \
     chemistry, history, geography, civic_education, region_code";

/// SQLite-backed [`ScoreStore`]. Owns its connection for the life of the app.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database file at `path`.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        info!("opened score database {}", path.display());
        Self::with_connection(conn)
    }

    /// A private in-memory database, for tests and dry runs.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        // Only creates the table when missing; an existing table is used as-is.
        conn.execute(CREATE_SCORES, [])?;
        Ok(SqliteStore { conn })
    }

    /// Number of stored records.
    pub fn count(&self) -> Result<u64, StoreError> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM scores", [], |r| r.get(0))?;
        Ok(n as u64)
    }
}

impl ScoreStore for SqliteStore {
    fn find(&self, id: i64) -> Result<Option<Score>, StoreError> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM scores WHERE id = ?1");
        let score = self
            .conn
            .query_row(&sql, params![id], score_from_row)
            .optional()?;
        Ok(score)
    }

    fn commit(&mut self, batch: &UpsertBatch) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        {
            let mut insert = tx.prepare(
                "INSERT INTO scores(id, math, literature, physics, biology, foreign_language, year,
                    chemistry, history, geography, civic_education, region_code)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            )?;
            for s in &batch.inserts {
                insert.execute(params![
                    s.id,
                    s.math,
                    s.literature,
                    s.physics,
                    s.biology,
                    s.foreign_language,
                    s.year,
                    s.chemistry,
                    s.history,
                    s.geography,
                    s.civic_education,
                    s.region_code,
                ])?;
            }

            let mut update = tx.prepare(
                "UPDATE scores SET math = ?2, literature = ?3, physics = ?4, biology = ?5,
                    foreign_language = ?6, year = ?7, chemistry = ?8, history = ?9,
                    geography = ?10, civic_education = ?11, region_code = ?12
                 WHERE id = ?1",
            )?;
            for s in &batch.updates {
                update.execute(params![
                    s.id,
                    s.math,
                    s.literature,
                    s.physics,
                    s.biology,
                    s.foreign_language,
                    s.year,
                    s.chemistry,
                    s.history,
                    s.geography,
                    s.civic_education,
                    s.region_code,
                ])?;
            }
        }
        // Dropping `tx` without commit rolls everything back.
        tx.commit()?;
        Ok(())
    }
}

fn score_from_row(row: &Row<'_>) -> rusqlite::Result<Score> {
    Ok(Score {
        id: row.get(0)?,
        math: row.get(1)?,
        literature: row.get(2)?,
        physics: row.get(3)?,
        biology: row.get(4)?,
        foreign_language: row.get(5)?,
        year: row.get(6)?,
        chemistry: row.get(7)?,
        history: row.get(8)?,
        geography: row.get(9)?,
        civic_education: row.get(10)?,
        region_code: row.get(11)?,
    })
}
