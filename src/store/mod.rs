//! Persistent store for scores, keyed by candidate id.

pub mod reconcile;
pub mod sqlite;

use crate::data::model::Score;
use crate::error::StoreError;

pub use reconcile::{import_scores, reconcile, ImportSummary};
pub use sqlite::SqliteStore;

/// Pending writes produced by the reconciler, committed in one call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpsertBatch {
    /// Records whose id is not in the store yet.
    pub inserts: Vec<Score>,
    /// Stored records with every non-key field already overwritten.
    pub updates: Vec<Score>,
}

impl UpsertBatch {
    pub fn is_empty(&self) -> bool {
        self.inserts.is_empty() && self.updates.is_empty()
    }
}

/// A table of [`Score`]s keyed by `id`.
pub trait ScoreStore {
    /// Point lookup by primary key.
    fn find(&self, id: i64) -> Result<Option<Score>, StoreError>;

    /// Apply every insert and update of `batch` as a single operation.
    fn commit(&mut self, batch: &UpsertBatch) -> Result<(), StoreError>;
}
