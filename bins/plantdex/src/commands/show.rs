//! Show command - full details for one record

use crate::output::Status;
use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use plantdex_core::{CollectionStore, PlantRecord};

/// Run show command
pub fn run(store: &CollectionStore, index: usize, format: &str) -> Result<()> {
    let records = store.load()?;
    let record = match records.get(index) {
        Some(record) => record,
        None => bail!(
            "no record at index {} (collection has {})",
            index,
            records.len()
        ),
    };

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    print_card(index, record);
    Ok(())
}

/// Full record card shared by `show` and `scan`.
pub(crate) fn print_card(index: usize, record: &PlantRecord) {
    Status::header(&format!("#{} {}", index, record.plant_name));

    if !record.plant_in_image {
        println!(
            "  {}",
            "No plant could be identified in this photo.".yellow()
        );
        println!();
        return;
    }

    print_field("Description", record.description.as_deref());
    print_field("Soil", record.soil_type.as_deref());
    print_field("Watering", record.watering_needs.as_deref());
    print_field("Frequency", record.watering_frequency.as_deref());
    print_field("Read more", record.wikipedia_url.as_deref());
    println!();
}

fn print_field(label: &str, value: Option<&str>) {
    if let Some(value) = value {
        println!("  {} {}", format!("{:<12}", label).bold(), value);
    }
}
