//! Output generation for CSV tables and the JSON run summary.
//!
//! # Submodules
//!
//! - [`csv`]: Raw corpus, enriched records, top labels and top words
//! - [`json`]: Pretty-printed [`RunSummary`](crate::models::RunSummary)
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── raw_articles.csv        # Scraped corpus (skipped with --from-raw)
//! ├── processed_articles.csv  # One enriched record per article
//! ├── tops.csv                # Top topics, then top countries
//! ├── top20_words.csv         # Corpus word frequencies
//! └── summary.json            # Run metadata and aggregate report
//! ```

pub mod csv;
pub mod json;

use crate::error::CorpusError;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

const WRITE_CHECK_FILE: &str = ".news_corpus_write_check";

/// File locations for one run, all inside a single output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub raw: PathBuf,
    pub processed: PathBuf,
    pub tops: PathBuf,
    pub words: PathBuf,
    pub summary: PathBuf,
}

impl OutputPaths {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        let dir = output_dir.as_ref();
        Self {
            raw: dir.join("raw_articles.csv"),
            processed: dir.join("processed_articles.csv"),
            tops: dir.join("tops.csv"),
            words: dir.join("top20_words.csv"),
            summary: dir.join("summary.json"),
        }
    }

    /// Create `output_dir` if needed and confirm files can be written there.
    ///
    /// Runs before any network work so a bad path fails the run up front.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::Io`] if the directory cannot be created or a
    /// scratch file cannot be written and removed inside it.
    #[instrument(level = "info", skip_all, fields(dir = %output_dir.as_ref().display()))]
    pub async fn prepare(output_dir: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let dir = output_dir.as_ref();
        fs::create_dir_all(dir).await?;
        let check = dir.join(WRITE_CHECK_FILE);
        fs::write(&check, b"").await?;
        fs::remove_file(&check).await?;
        info!("Output directory is writable");
        Ok(Self::new(dir))
    }
}
