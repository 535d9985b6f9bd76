//! CLI command implementations

use anyhow::Result;
use plantdex_core::CollectionStore;
use std::path::PathBuf;

pub mod clear;
pub mod delete;
pub mod list;
pub mod scan;
pub mod search;
pub mod show;

/// Open the collection store at `path`, or at the platform default
/// location when no path was given.
pub fn open_store(path: Option<PathBuf>) -> Result<CollectionStore> {
    match path {
        Some(path) => Ok(CollectionStore::new(path)),
        None => Ok(CollectionStore::default_location()?),
    }
}
