//! Scan command - identify a photo and save the record

use crate::commands::show::print_card;
use crate::output::Status;
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use plantdex_api_client::IdentifyClient;
use plantdex_core::CollectionStore;
use plantdex_image::{ThumbnailOptions, detect_format, thumbnail_data_url, to_data_url};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Run scan command
pub async fn run(
    store: &CollectionStore,
    image: &Path,
    thumbnail_width: u32,
    format: &str,
) -> Result<()> {
    let data = std::fs::read(image)
        .with_context(|| format!("could not read photo at {}", image.display()))?;
    let image_format = detect_format(&data)?;
    debug!(
        bytes = data.len(),
        mime = image_format.mime_type(),
        "Photo loaded"
    );

    let client = IdentifyClient::new()?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Analyzing photo with the identification service...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let analysis = client
        .identify()
        .analyze(&to_data_url(image_format, &data))
        .await;
    spinner.finish_and_clear();
    let analysis = analysis?;

    let options = ThumbnailOptions {
        max_width: thumbnail_width,
        ..ThumbnailOptions::default()
    };
    let thumbnail = thumbnail_data_url(&data, &options)?;

    let records = store.add(analysis.into_record(thumbnail))?;
    // `add` prepends, so the new record is the first element.
    let added = &records[0];

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(added)?);
        return Ok(());
    }

    if added.plant_in_image {
        Status::success(&format!("Saved {}", added.plant_name));
    } else {
        Status::warning("No plant could be identified in this photo; saved anyway.");
    }
    print_card(0, added);

    Ok(())
}
