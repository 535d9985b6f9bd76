//! Clear command - delete the whole collection

use crate::output::{Status, format_count};
use anyhow::Result;
use plantdex_core::CollectionStore;

/// Run clear command
pub fn run(store: &CollectionStore, yes: bool) -> Result<()> {
    if !yes {
        Status::warning("This deletes every saved plant. Re-run with --yes to confirm.");
        return Ok(());
    }

    let removed = store.clear()?;
    Status::success(&format!(
        "Deleted {}",
        format_count(removed, "plant", "plants")
    ));
    Ok(())
}
