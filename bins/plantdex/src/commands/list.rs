//! List command - print every saved record

use crate::output::{Status, format_count};
use anyhow::Result;
use owo_colors::OwoColorize;
use plantdex_core::{CollectionStore, PlantRecord};

/// Run list command
pub fn run(store: &CollectionStore, format: &str) -> Result<()> {
    let records = store.load()?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        Status::info("No plants scanned yet. Add one with `plantdex scan <photo>`.");
        return Ok(());
    }

    Status::header(&format!(
        "Collection ({})",
        format_count(records.len(), "plant", "plants")
    ));
    for (index, record) in records.iter().enumerate() {
        print_summary_line(index, record);
    }
    println!();

    Ok(())
}

/// One-line record summary shared by `list`, `search`, and `scan`.
pub(crate) fn print_summary_line(index: usize, record: &PlantRecord) {
    let marker = if record.plant_in_image {
        "●".green().to_string()
    } else {
        "○".red().to_string()
    };

    let description = record
        .description
        .as_deref()
        .map(|text| truncate(text, 60))
        .unwrap_or_default();

    println!(
        "  {} {} {}  {}",
        format!("#{}", index).dimmed(),
        marker,
        record.plant_name.bold(),
        description.dimmed()
    );
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let prefix: String = text.chars().take(max_chars).collect();
        format!("{}…", prefix)
    }
}
