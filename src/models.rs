//! Data models for feed items, scraped articles and their enriched form.
//!
//! This module defines the records that flow through the pipeline:
//! - [`FeedItem`]: One `<item>` from the RSS feed
//! - [`RawArticle`]: A scraped article that passed the quality gate
//! - [`EnrichedArticle`]: A normalized, classified article
//! - [`AggregateReport`]: Corpus-wide frequency tables
//! - [`RunSummary`]: Metadata for one batch run, written as JSON

use serde::{Deserialize, Serialize};

/// One entry of the syndication feed.
///
/// `url` is the natural key. The date is kept as text: RFC 2822 dates are
/// reduced to `yyyy-mm-dd` by the feed reader, anything else passes through.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedItem {
    pub title: String,
    pub url: String,
    pub publication_date_raw: String,
    /// Value of `dc:creator`, empty if absent.
    pub author_feed: String,
}

/// A scraped article before normalization.
///
/// Serialized with the Spanish column names of the raw corpus CSV
/// (`titulo, fecha_publicacion, url, autor, texto`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct RawArticle {
    #[serde(rename = "titulo", default)]
    pub title: String,
    #[serde(rename = "fecha_publicacion", default)]
    pub date_raw: String,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "autor", default)]
    pub author: String,
    #[serde(rename = "texto", default)]
    pub body_text: String,
}

/// An article after normalization, classification and word counting.
///
/// `topic` and `country` always hold a value: unmatched articles get the
/// configured catch-all labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedArticle {
    /// Normalized (lowercased, whitespace-collapsed) title.
    pub title: String,
    pub url: String,
    pub author: String,
    pub author_missing: bool,
    pub date_raw: String,
    /// `dd/mm/yyyy`, or the no-date label when `date_missing` is set.
    pub date_canonical: String,
    pub date_missing: bool,
    /// Normalized body text.
    pub body_text: String,
    pub topic: String,
    pub country: String,
    pub top5_words: Vec<String>,
    pub word_count: usize,
}

/// A value and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CountEntry {
    pub value: String,
    pub count: usize,
}

impl CountEntry {
    pub fn new(value: impl Into<String>, count: usize) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }
}

/// Frequency tables over the whole corpus.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct AggregateReport {
    pub top_topics: Vec<CountEntry>,
    pub top_countries: Vec<CountEntry>,
    pub top_words: Vec<CountEntry>,
}

/// Metadata describing one batch run.
#[derive(Debug, Deserialize, Serialize)]
pub struct RunSummary {
    /// Local timestamp in RFC 3339 format.
    pub generated_at: String,
    /// Feed endpoint that supplied the items, `None` for processing-only runs.
    pub feed_url: Option<String>,
    pub items_in_feed: usize,
    pub articles_collected: usize,
    pub articles_processed: usize,
    pub report: AggregateReport,
}
