//! Error type shared by the acquisition and output layers.
//!
//! Classification never fails, so nothing in `analysis` returns this type
//! except classifier construction from user-supplied configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid country pattern for \"{entry}\": {source}")]
    Pattern {
        entry: String,
        #[source]
        source: regex::Error,
    },

    #[error("no feed items obtainable from any of {tried} feed endpoints")]
    NoFeedItems { tried: usize },
}
