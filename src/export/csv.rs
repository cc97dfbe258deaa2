// Tabular (CSV) export — delegates row generation to the History Store.
//
// We never rebuild the rows from in-memory records; the store's raw text
// is written verbatim so the two sides can't drift apart.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::backend::client::VerityClient;

/// Fixed output filename.
pub const CSV_FILENAME: &str = "verityflow-history.csv";

/// Fetch the server-generated CSV and write it to `export_dir`.
/// Returns the written path. No retry on failure.
pub async fn export_csv(client: &VerityClient, export_dir: &Path) -> Result<PathBuf> {
    let export = client.export_tabular().await?;

    if export.format != "csv" {
        anyhow::bail!("Backend returned unexpected export format: {}", export.format);
    }

    let path = export_dir.join(CSV_FILENAME);
    fs::write(&path, export.data.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    debug!(bytes = export.data.len(), "CSV export written");
    Ok(path)
}
