use log::debug;

use super::model::ReadingStore;
use crate::error::{DataError, Result};

// ---------------------------------------------------------------------------
// Zip-code filter: which zip codes show up as table rows
// ---------------------------------------------------------------------------

/// Active/inactive flag per zip code, in the store's zip order.
///
/// Keys are fixed at construction; only [`ZipFilter::toggle`] mutates the
/// flags.
#[derive(Debug, Clone, Default)]
pub struct ZipFilter {
    entries: Vec<(String, bool)>,
}

impl ZipFilter {
    /// Initialise a filter with every zip code of `store` active.
    pub fn from_store(store: &ReadingStore) -> Self {
        Self {
            entries: store
                .zip_codes()
                .iter()
                .map(|zip| (zip.clone(), true))
                .collect(),
        }
    }

    /// Flip the flag for `zip`.
    pub fn toggle(&mut self, zip: &str) -> Result<bool> {
        let entry = self
            .entries
            .iter_mut()
            .find(|(key, _)| key == zip)
            .ok_or_else(|| DataError::KeyNotFound(zip.to_string()))?;
        entry.1 = !entry.1;
        debug!("zip {zip} is now {}", if entry.1 { "active" } else { "inactive" });
        Ok(entry.1)
    }

    /// Copy of every (zip, active) pair in stable order.
    pub fn snapshot(&self) -> Vec<(String, bool)> {
        self.entries.clone()
    }

    /// Zip codes currently marked active, in stable order.
    pub fn active_keys(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, active)| *active)
            .map(|(key, _)| key.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Reading;

    fn filter() -> ZipFilter {
        let store = ReadingStore::from_readings(vec![
            Reading::new("94028", "Night", 1.0),
            Reading::new("94304", "Night", 1.0),
            Reading::new("94028", "Midday", 1.0),
            Reading::new("95014", "Night", 1.0),
        ]);
        ZipFilter::from_store(&store)
    }

    #[test]
    fn starts_all_active() {
        let f = filter();
        assert_eq!(f.snapshot().len(), 3);
        assert_eq!(f.active_keys(), ["94028", "94304", "95014"]);
    }

    #[test]
    fn toggle_twice_restores_flag() {
        let mut f = filter();
        assert!(!f.toggle("94304").unwrap());
        assert_eq!(f.active_keys(), ["94028", "95014"]);
        assert!(f.toggle("94304").unwrap());
        assert_eq!(f.active_keys(), ["94028", "94304", "95014"]);
    }

    #[test]
    fn unknown_zip_fails_and_leaves_filter_unchanged() {
        let mut f = filter();
        f.toggle("94028").unwrap();
        let before = f.snapshot();
        assert!(matches!(f.toggle("00000"), Err(DataError::KeyNotFound(z)) if z == "00000"));
        assert_eq!(f.snapshot(), before);
    }

    #[test]
    fn snapshot_is_a_copy() {
        let f = filter();
        let mut snap = f.snapshot();
        snap[0].1 = false;
        assert_eq!(f.active_keys().len(), 3);
        assert_eq!(snap[1], ("94304".to_string(), true));
    }
}
