use std::path::{Path, PathBuf};

use log::{error, info};

use crate::data::filter::filtered_indices;
use crate::data::loader::load_file;
use crate::data::model::{Score, ScoreDataset, YearSelection};
use crate::error::SessionError;
use crate::store::{import_scores, ImportSummary, ScoreStore};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Everything the viewer shows, independent of rendering.
///
/// The presentation layer only calls [`load`](Self::load),
/// [`set_year`](Self::set_year), [`import`](Self::import) and
/// [`clear`](Self::clear), then renders the fields.
#[derive(Debug, Default)]
pub struct AppState {
    /// Records of the last successful load. Empty after a failed load.
    pub dataset: ScoreDataset,

    /// File the dataset came from.
    pub source_path: Option<PathBuf>,

    /// Current year filter.
    pub selection: YearSelection,

    /// Indices of records passing the current filter (cached).
    pub visible_indices: Vec<usize>,

    /// Status / error message shown in the UI.
    pub status_message: Option<Status>,

    /// Set while a load or import runs; a second one is rejected.
    pub busy: bool,
}

/// Last outcome, for the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

impl AppState {
    /// Replace the dataset with the contents of `path`.
    ///
    /// The old dataset is cleared first; on failure it stays cleared.
    pub fn load(&mut self, path: &Path) -> Result<(), SessionError> {
        self.begin()?;
        self.reset_dataset();
        self.source_path = Some(path.to_path_buf());

        let result = load_file(path);
        self.busy = false;

        match result {
            Ok(dataset) => {
                info!(
                    "Loaded {} records covering years {:?} from {}",
                    dataset.len(),
                    dataset.years,
                    path.display()
                );
                self.status_message = Some(Status::Info(format!(
                    "{} records loaded",
                    dataset.len()
                )));
                self.visible_indices = (0..dataset.len()).collect();
                self.dataset = dataset;
                Ok(())
            }
            Err(e) => {
                let err = SessionError::from(e);
                error!("{err}");
                self.status_message = Some(Status::Error(err.to_string()));
                Err(err)
            }
        }
    }

    /// Change the year filter and recompute the visible rows.
    pub fn set_year(&mut self, selection: YearSelection) {
        self.selection = selection;
        self.refilter();
    }

    /// Recompute `visible_indices` after a filter or dataset change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.dataset.records, self.selection);
    }

    /// Records passing the current filter, in display order.
    pub fn visible(&self) -> impl Iterator<Item = &Score> + '_ {
        self.visible_indices
            .iter()
            .map(move |&i| &self.dataset.records[i])
    }

    /// Upsert the whole dataset (not just the visible rows) into `store`.
    pub fn import<S: ScoreStore + ?Sized>(
        &mut self,
        store: &mut S,
    ) -> Result<ImportSummary, SessionError> {
        self.begin()?;
        let result = import_scores(store, &self.dataset.records);
        self.busy = false;

        match result {
            Ok(summary) => {
                self.status_message = Some(Status::Info(format!(
                    "Import successful: {} inserted, {} updated",
                    summary.inserted, summary.updated
                )));
                Ok(summary)
            }
            Err(e) => {
                let err = SessionError::from(e);
                error!("{err}");
                self.status_message = Some(Status::Error(err.to_string()));
                Err(err)
            }
        }
    }

    /// Drop the dataset, the file path, the filter and the status line.
    pub fn clear(&mut self) {
        self.reset_dataset();
        self.source_path = None;
        self.status_message = None;
    }

    fn reset_dataset(&mut self) {
        self.dataset = ScoreDataset::default();
        self.selection = YearSelection::All;
        self.visible_indices.clear();
    }

    fn begin(&mut self) -> Result<(), SessionError> {
        if self.busy {
            return Err(SessionError::Busy);
        }
        self.busy = true;
        Ok(())
    }
}
