//! Import command handler

use anyhow::Context;
use std::path::Path;

use crate::config::Config;
use crate::models::TourImportRecord;
use crate::state::SharedState;

/// Reads a JSON array of catalogue records and stores them in one go.
pub async fn cmd_import(config: &Config, path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        println!("File does not exist: {}", path.display());
        return Ok(());
    }

    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let records: Vec<TourImportRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse tour catalogue {}", path.display()))?;

    if records.is_empty() {
        println!("No tours found in {}", path.display());
        return Ok(());
    }

    let state = SharedState::new(config.clone()).await?;

    println!("Importing {} tours from {}...", records.len(), path.display());
    let imported = state.tour_service.import_tours(records).await?;
    println!("✓ Imported {} tours", imported);

    Ok(())
}
