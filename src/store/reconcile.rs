use std::collections::HashMap;

use log::{debug, info};

use crate::data::model::Score;
use crate::error::StoreError;

use super::{ScoreStore, UpsertBatch};

/// Counts reported back after a successful import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub inserted: usize,
    pub updated: usize,
}

/// Decide per record whether it is an insert or an update.
///
/// Records sharing an id are collapsed first: the last occurrence's values win
/// and take the slot of the first occurrence. Nothing is written here.
pub fn reconcile<S: ScoreStore + ?Sized>(
    store: &S,
    records: &[Score],
) -> Result<UpsertBatch, StoreError> {
    let mut batch = UpsertBatch::default();

    for record in collapse_duplicate_ids(records) {
        match store.find(record.id)? {
            None => {
                debug!("id {} is new, inserting", record.id);
                batch.inserts.push(record.clone());
            }
            Some(mut existing) => {
                debug!("id {} exists, updating", record.id);
                existing.overwrite_from(record);
                batch.updates.push(existing);
            }
        }
    }
    Ok(batch)
}

/// Reconcile `records` against `store` and commit the result in one batch.
pub fn import_scores<S: ScoreStore + ?Sized>(
    store: &mut S,
    records: &[Score],
) -> Result<ImportSummary, StoreError> {
    let batch = reconcile(store, records)?;
    let summary = ImportSummary {
        inserted: batch.inserts.len(),
        updated: batch.updates.len(),
    };
    if !batch.is_empty() {
        store.commit(&batch)?;
    }
    info!(
        "import committed: {} inserted, {} updated",
        summary.inserted, summary.updated
    );
    Ok(summary)
}

fn collapse_duplicate_ids(records: &[Score]) -> Vec<&Score> {
    let mut slot_of: HashMap<i64, usize> = HashMap::with_capacity(records.len());
    let mut out: Vec<&Score> = Vec::with_capacity(records.len());
    for record in records {
        match slot_of.get(&record.id) {
            Some(&slot) => out[slot] = record,
            None => {
                slot_of.insert(record.id, out.len());
                out.push(record);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::BTreeMap;

    use super::*;

    /// Map-backed store that counts calls and can be told to fail.
    #[derive(Default)]
    struct MapStore {
        rows: BTreeMap<i64, Score>,
        lookups: Cell<usize>,
        commits: usize,
        fail_lookup: bool,
    }

    impl ScoreStore for MapStore {
        fn find(&self, id: i64) -> Result<Option<Score>, StoreError> {
            self.lookups.set(self.lookups.get() + 1);
            if self.fail_lookup {
                return Err(StoreError::Db(rusqlite::Error::InvalidQuery));
            }
            Ok(self.rows.get(&id).cloned())
        }

        fn commit(&mut self, batch: &UpsertBatch) -> Result<(), StoreError> {
            self.commits += 1;
            for s in batch.inserts.iter().chain(&batch.updates) {
                self.rows.insert(s.id, s.clone());
            }
            Ok(())
        }
    }

    #[test]
    fn splits_new_and_existing_ids() {
        let mut store = MapStore::default();
        store.rows.insert(1, Score::new(1, 2019, 9));

        let mut changed = Score::new(1, 2021, 4);
        changed.biology = Some(5.5);
        let fresh = Score::new(2, 2021, 4);

        let batch = reconcile(&store, &[changed.clone(), fresh.clone()]).unwrap();
        assert_eq!(batch.inserts, vec![fresh]);
        assert_eq!(batch.updates, vec![changed]);
    }

    #[test]
    fn last_duplicate_wins_in_first_slot() {
        let store = MapStore::default();
        let first = Score::new(5, 2020, 1);
        let other = Score::new(6, 2020, 1);
        let mut last = Score::new(5, 2020, 1);
        last.math = Some(10.0);

        let batch = reconcile(&store, &[first, other.clone(), last.clone()]).unwrap();
        assert_eq!(batch.inserts, vec![last, other]);
        assert_eq!(store.lookups.get(), 2);
    }

    #[test]
    fn lookup_failure_aborts_without_commit() {
        let mut store = MapStore {
            fail_lookup: true,
            ..MapStore::default()
        };
        let result = import_scores(&mut store, &[Score::new(1, 2020, 0)]);
        assert!(result.is_err());
        assert_eq!(store.commits, 0);
    }

    #[test]
    fn empty_import_does_not_commit() {
        let mut store = MapStore::default();
        let summary = import_scores(&mut store, &[]).unwrap();
        assert_eq!(summary, ImportSummary::default());
        assert_eq!(store.commits, 0);
    }
}
