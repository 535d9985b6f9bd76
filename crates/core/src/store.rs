//! JSON-file persistence for the plant collection.
//!
//! The collection is a single JSON array, loaded in full at startup and
//! written back in full after every mutation. Collections stay small
//! (photos are stored as pre-shrunk thumbnails), so whole-file writes
//! are simpler than anything incremental and keep the file readable by
//! hand.

use crate::error::{CoreError, Result};
use crate::model::PlantRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the collection inside the data directory.
const COLLECTION_FILE: &str = "plants.json";

/// File-backed plant collection.
pub struct CollectionStore {
    path: PathBuf,
}

impl CollectionStore {
    /// Store backed by an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default location,
    /// `<data dir>/plantdex/plants.json`.
    pub fn default_location() -> Result<Self> {
        let dir = dirs::data_dir().ok_or(CoreError::NoDataDir)?;
        Ok(Self::new(dir.join("plantdex").join(COLLECTION_FILE)))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole collection. A missing file is an empty collection.
    pub fn load(&self) -> Result<Vec<PlantRecord>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No collection file yet, starting empty");
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path)?;
        let records: Vec<PlantRecord> = serde_json::from_str(&raw)?;
        debug!(path = %self.path.display(), count = records.len(), "Loaded collection");
        Ok(records)
    }

    /// Write the whole collection, creating the parent directory on
    /// first use.
    pub fn save(&self, records: &[PlantRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, serde_json::to_string_pretty(records)?)?;
        debug!(path = %self.path.display(), count = records.len(), "Saved collection");
        Ok(())
    }

    /// Prepend a record (newest first) and persist. Returns the updated
    /// collection.
    pub fn add(&self, record: PlantRecord) -> Result<Vec<PlantRecord>> {
        let mut records = self.load()?;
        records.insert(0, record);
        self.save(&records)?;
        Ok(records)
    }

    /// Remove the record at `index` (its saved position) and persist.
    /// Returns the removed record.
    pub fn remove(&self, index: usize) -> Result<PlantRecord> {
        let mut records = self.load()?;
        if index >= records.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: records.len(),
            });
        }

        let removed = records.remove(index);
        self.save(&records)?;
        Ok(removed)
    }

    /// Delete every record and persist the empty collection. Returns how
    /// many records were deleted.
    pub fn clear(&self) -> Result<usize> {
        let records = self.load()?;
        let count = records.len();
        self.save(&[])?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store() -> (CollectionStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = CollectionStore::new(temp_dir.path().join("plants.json"));
        (store, temp_dir)
    }

    fn record(name: &str) -> PlantRecord {
        PlantRecord {
            plant_in_image: true,
            plant_name: name.to_string(),
            description: None,
            watering_needs: None,
            watering_frequency: None,
            soil_type: None,
            wikipedia_url: None,
            image_data_url: "data:image/jpeg;base64,AAAA".to_string(),
        }
    }

    #[test]
    fn test_missing_file_is_empty_collection() {
        let (store, _temp) = test_store();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let (store, _temp) = test_store();

        store.save(&[record("Rose"), record("Tulip")]).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].plant_name, "Rose");
        assert_eq!(loaded[1].plant_name, "Tulip");
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let store = CollectionStore::new(temp_dir.path().join("nested").join("plants.json"));

        store.save(&[record("Fern")]).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_add_prepends() {
        let (store, _temp) = test_store();

        store.add(record("Rose")).unwrap();
        let updated = store.add(record("Tulip")).unwrap();

        assert_eq!(updated[0].plant_name, "Tulip");
        assert_eq!(updated[1].plant_name, "Rose");

        let loaded = store.load().unwrap();
        assert_eq!(loaded[0].plant_name, "Tulip");
    }

    #[test]
    fn test_remove_by_index() {
        let (store, _temp) = test_store();
        store
            .save(&[record("Rose"), record("Tulip"), record("Fern")])
            .unwrap();

        let removed = store.remove(1).unwrap();
        assert_eq!(removed.plant_name, "Tulip");

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].plant_name, "Rose");
        assert_eq!(loaded[1].plant_name, "Fern");
    }

    #[test]
    fn test_remove_out_of_range() {
        let (store, _temp) = test_store();
        store.save(&[record("Rose")]).unwrap();

        let err = store.remove(5).unwrap_err();
        assert!(matches!(
            err,
            CoreError::IndexOutOfRange { index: 5, len: 1 }
        ));

        // Nothing was deleted.
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_clear() {
        let (store, _temp) = test_store();
        store.save(&[record("Rose"), record("Tulip")]).unwrap();

        assert_eq!(store.clear().unwrap(), 2);
        assert!(store.load().unwrap().is_empty());

        // Clearing an already empty collection is fine.
        assert_eq!(store.clear().unwrap(), 0);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let (store, _temp) = test_store();
        fs::write(store.path(), "not json at all").unwrap();

        assert!(matches!(store.load(), Err(CoreError::Malformed(_))));
    }
}
