//! Runtime configuration for collection and classification.
//!
//! Every field has a built-in default (see [`crate::defaults`]). A YAML file
//! passed with `--config` may override any subset of them:
//!
//! ```yaml
//! max_articles: 20
//! request_delay_ms: 500
//! countries: ["peru", "colombia", "amazonia"]
//! topics:
//!   - name: "Agua"
//!     keywords: ["agua", "rio"]
//! ```

use crate::defaults;
use crate::error::CorpusError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;
use tracing::{info, instrument};

/// One entry of the keyword dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TopicKeywords {
    pub name: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Candidate feed endpoints, tried in order.
    pub feed_urls: Vec<String>,
    pub user_agent: String,
    pub accept_language: String,
    pub request_timeout_secs: u64,
    /// Pause after each accepted article.
    pub request_delay_ms: u64,
    pub max_articles: usize,
    /// Quality gate, measured in characters.
    pub min_body_chars: usize,
    pub stopwords: Vec<String>,
    /// Ordered; earlier topics win scoring ties.
    pub topics: Vec<TopicKeywords>,
    /// Ordered; the first entry found in the text wins.
    pub countries: Vec<String>,
    /// Display names keyed by the diacritic-stripped lowercase entry.
    pub country_display: BTreeMap<String, String>,
    pub no_date_label: String,
    pub uncategorized_label: String,
    pub unspecified_country_label: String,
    pub unknown_author_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_urls: to_strings(defaults::FEED_URLS),
            user_agent: defaults::USER_AGENT.to_string(),
            accept_language: defaults::ACCEPT_LANGUAGE.to_string(),
            request_timeout_secs: 30,
            request_delay_ms: 1000,
            max_articles: 50,
            min_body_chars: 200,
            stopwords: to_strings(defaults::STOPWORDS_ES),
            topics: defaults::TOPIC_KEYWORDS
                .iter()
                .map(|(name, keywords)| TopicKeywords {
                    name: (*name).to_string(),
                    keywords: to_strings(keywords),
                })
                .collect(),
            countries: to_strings(defaults::COUNTRIES),
            country_display: defaults::COUNTRY_DISPLAY
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            no_date_label: "no date".to_string(),
            uncategorized_label: "uncategorized".to_string(),
            unspecified_country_label: "regional/unspecified".to_string(),
            unknown_author_label: "unknown".to_string(),
        }
    }
}

impl Config {
    /// Load a YAML config, falling back to defaults for missing fields.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml(&text)?;
        info!(
            feeds = config.feed_urls.len(),
            topics = config.topics.len(),
            countries = config.countries.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    pub fn from_yaml(text: &str) -> Result<Self, CorpusError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

fn to_strings(xs: &[&str]) -> Vec<String> {
    xs.iter().map(|s| (*s).to_string()).collect()
}
