//! Search command - fuzzy-rank the collection against a query

use crate::commands::list::print_summary_line;
use crate::output::Status;
use anyhow::Result;
use owo_colors::OwoColorize;
use plantdex_core::CollectionStore;
use plantdex_search::rank_records;

/// Run search command
pub fn run(store: &CollectionStore, query: &str, format: &str) -> Result<()> {
    let records = store.load()?;
    let ranked = rank_records(query, &records);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    if ranked.is_empty() {
        Status::info("No plants scanned yet. Add one with `plantdex scan <photo>`.");
        return Ok(());
    }

    Status::header(&format!("Best matches for \"{}\"", query));
    for entry in &ranked {
        print_summary_line(entry.index, entry.record);
    }
    println!();
    println!(
        "  {}",
        "Indices are saved positions; they work with `show` and `delete`.".dimmed()
    );

    Ok(())
}
