//! JSON run summary.
//!
//! One pretty-printed [`RunSummary`] per run, next to the CSV outputs:
//! the feed endpoint that was used, counts at each stage and the
//! aggregate report.

use crate::error::CorpusError;
use crate::models::RunSummary;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write a [`RunSummary`] to `path`, creating the parent directory if needed.
///
/// # Errors
///
/// Returns an error if serialization, directory creation or the write fails.
#[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
pub async fn write_summary(
    summary: &RunSummary,
    path: impl AsRef<Path>,
) -> Result<(), CorpusError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(summary)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(dir).await {
            error!(dir = %dir.display(), error = %e, "Failed to create summary dir");
            return Err(e.into());
        }
    }

    fs::write(path, json).await?;
    info!(
        articles = summary.articles_processed,
        "Wrote run summary"
    );
    Ok(())
}
