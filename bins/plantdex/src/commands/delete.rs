//! Delete command - remove one record by its saved index

use crate::output::Status;
use anyhow::Result;
use plantdex_core::CollectionStore;

/// Run delete command
pub fn run(store: &CollectionStore, index: usize, format: &str) -> Result<()> {
    let removed = store.remove(index)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&removed)?);
        return Ok(());
    }

    Status::success(&format!("Deleted {} (was #{})", removed.plant_name, index));
    Ok(())
}
