mod common;

use common::TestWorkspace;
use score_import::state::Status;
use score_import::store::{import_scores, ImportSummary};
use score_import::{AppState, Score, ScoreStore, SessionError, SqliteStore, YearSelection};

fn stored(id: i64, year: i32, math: Option<f64>) -> Score {
    let mut s = Score::new(id, year, 1);
    s.math = math;
    s
}

#[test]
fn existing_id_is_updated_and_new_id_inserted() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    import_scores(&mut store, &[stored(100, 2020, Some(4.0))]).unwrap();

    let mut changed = stored(100, 2021, None);
    changed.region_code = 7;
    changed.geography = Some(8.75);
    let fresh = stored(200, 2021, Some(9.5));

    let summary = import_scores(&mut store, &[changed.clone(), fresh.clone()]).unwrap();
    assert_eq!(
        summary,
        ImportSummary {
            inserted: 1,
            updated: 1
        }
    );

    assert_eq!(store.find(100).unwrap(), Some(changed));
    assert_eq!(store.find(200).unwrap(), Some(fresh));
    assert_eq!(store.count().unwrap(), 2);
}

#[test]
fn update_clears_scores_that_became_absent() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    import_scores(&mut store, &[stored(1, 2020, Some(6.0))]).unwrap();
    import_scores(&mut store, &[stored(1, 2020, None)]).unwrap();
    assert_eq!(store.find(1).unwrap().and_then(|s| s.math), None);
}

#[test]
fn duplicate_ids_in_one_batch_keep_the_last_values() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let summary = import_scores(
        &mut store,
        &[stored(5, 2020, Some(1.0)), stored(5, 2020, Some(2.0))],
    )
    .unwrap();
    assert_eq!(summary.inserted, 1);
    assert_eq!(store.find(5).unwrap().and_then(|s| s.math), Some(2.0));
}

#[test]
fn state_imports_the_whole_dataset_not_the_filtered_view() {
    let ws = TestWorkspace::new();
    let path = ws.write_scores(
        "scores.csv",
        &["10,5,,,,,2020,,,,,1", "11,6,,,,,2021,,,,,1", "12,7,,,,,2020,,,,,"],
    );
    let mut store = SqliteStore::open(&ws.path().join("scores.db")).unwrap();

    let mut state = AppState::default();
    state.load(&path).unwrap();
    state.set_year(YearSelection::Year(2021));

    let summary = state.import(&mut store).unwrap();
    assert_eq!(summary.inserted, 3);
    assert_eq!(store.count().unwrap(), 3);
    assert_eq!(store.find(12).unwrap().map(|s| s.region_code), Some(0));
    assert_eq!(
        state.status_message,
        Some(Status::Info("Import successful: 3 inserted, 0 updated".into()))
    );
}

#[test]
fn busy_state_rejects_a_second_operation() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let mut state = AppState {
        busy: true,
        ..AppState::default()
    };
    assert!(matches!(state.import(&mut store), Err(SessionError::Busy)));

    let ws = TestWorkspace::new();
    let path = ws.write_scores("s.csv", &["1,,,,,,2020,,,,,1"]);
    assert!(matches!(state.load(&path), Err(SessionError::Busy)));
}
