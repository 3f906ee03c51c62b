use std::path::Path;

use log::{debug, error};

use crate::data::filter::ZipFilter;
use crate::data::loader::load_file;
use crate::data::model::{ReadingStore, Statistic};
use crate::error::{DataError, Result};
use crate::ui::table::render_table;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// One row of the filter menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipLabel {
    /// 1-based menu number.
    pub index: usize,
    pub zip: String,
    pub active: bool,
}

/// The loaded dataset with its zip filter, independent of any I/O loop.
#[derive(Debug, Default)]
pub struct AppState {
    /// Store and filter are only ever replaced together.
    loaded: Option<(ReadingStore, ZipFilter)>,
}

impl AppState {
    /// Load `path`, replacing the current dataset and filters.
    ///
    /// On failure the previous dataset stays in place.
    pub fn load(&mut self, path: &Path) -> Result<usize> {
        let store =
            load_file(path).inspect_err(|e| error!("failed to load {}: {e}", path.display()))?;
        Ok(self.set_store(store))
    }

    /// Ingest a newly loaded store and reset filters to all-active.
    pub fn set_store(&mut self, store: ReadingStore) -> usize {
        let count = store.len();
        let filter = ZipFilter::from_store(&store);
        self.loaded = Some((store, filter));
        count
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.as_ref().is_some_and(|(store, _)| store.is_loaded())
    }

    fn require_loaded(&self) -> Result<&(ReadingStore, ZipFilter)> {
        self.loaded
            .as_ref()
            .filter(|(store, _)| store.is_loaded())
            .ok_or(DataError::EmptyDataset)
    }

    fn require_loaded_mut(&mut self) -> Result<&mut (ReadingStore, ZipFilter)> {
        self.loaded
            .as_mut()
            .filter(|(store, _)| store.is_loaded())
            .ok_or(DataError::EmptyDataset)
    }

    /// Zip codes with their menu numbers and flags.
    pub fn zip_labels(&self) -> Result<Vec<ZipLabel>> {
        let (_, filter) = self.require_loaded()?;
        Ok(filter
            .snapshot()
            .into_iter()
            .enumerate()
            .map(|(i, (zip, active))| ZipLabel {
                index: i + 1,
                zip,
                active,
            })
            .collect())
    }

    pub fn toggle(&mut self, zip: &str) -> Result<bool> {
        let (_, filter) = self.require_loaded_mut()?;
        filter.toggle(zip)
    }

    /// Toggle the zip code listed at 1-based menu number `index`.
    pub fn toggle_index(&mut self, index: i64) -> Result<bool> {
        let labels = self.zip_labels()?;
        let label = usize::try_from(index)
            .ok()
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| labels.get(i))
            .ok_or(DataError::IndexOutOfRange {
                index,
                len: labels.len(),
            })?;
        self.toggle(&label.zip)
    }

    pub fn render(&self, stat: Statistic) -> Result<String> {
        let (store, filter) = self.require_loaded()?;
        debug!("render requested: {stat}");
        render_table(store, filter, stat)
    }
}
