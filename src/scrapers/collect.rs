//! The collection loop: feed items in, deduplicated and gated corpus out.

use crate::config::Config;
use crate::models::{FeedItem, RawArticle};
use crate::scrapers::article::fetch_article;
use crate::scrapers::http::HttpClient;
use crate::utils::truncate_for_log;
use std::collections::HashSet;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

/// Limits applied while collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectOptions {
    pub max_articles: usize,
    pub min_body_chars: usize,
    /// Pause after each accepted article, skipped once the cap is reached.
    pub delay: Duration,
}

impl From<&Config> for CollectOptions {
    fn from(config: &Config) -> Self {
        Self {
            max_articles: config.max_articles,
            min_body_chars: config.min_body_chars,
            delay: config.request_delay(),
        }
    }
}

/// `true` when the body has at least `min_chars` characters.
pub fn passes_quality_gate(body: &str, min_chars: usize) -> bool {
    body.chars().count() >= min_chars
}

/// Fetch articles for `items` in feed order until the cap is reached.
///
/// Items with an empty or already-seen url are skipped without a request.
/// A url is marked seen before its page is fetched, so a failed fetch is
/// not retried later in the feed. Fetch failures and short bodies are
/// skipped and do not count towards the cap. Requests are sequential.
#[instrument(level = "info", skip_all, fields(items = items.len(), max = opts.max_articles))]
pub async fn collect_articles(
    client: &HttpClient,
    items: &[FeedItem],
    opts: &CollectOptions,
) -> Vec<RawArticle> {
    let mut corpus: Vec<RawArticle> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut failed = 0usize;
    let mut rejected = 0usize;

    for item in items {
        if corpus.len() >= opts.max_articles {
            break;
        }
        if item.url.is_empty() || !seen.insert(item.url.as_str()) {
            debug!(url = %item.url, "Skipping empty or duplicate url");
            continue;
        }

        let article = match fetch_article(client, item).await {
            Ok(article) => article,
            Err(e) => {
                warn!(url = %item.url, error = %e, "Could not open article; skipping");
                failed += 1;
                continue;
            }
        };

        if !passes_quality_gate(&article.body_text, opts.min_body_chars) {
            debug!(
                url = %item.url,
                chars = article.body_text.chars().count(),
                min = opts.min_body_chars,
                "Body too short; skipping"
            );
            rejected += 1;
            continue;
        }

        corpus.push(article);
        info!(
            collected = corpus.len(),
            max = opts.max_articles,
            title = %truncate_for_log(&item.title, 80),
            "Collected article"
        );

        if corpus.len() < opts.max_articles && !opts.delay.is_zero() {
            sleep(opts.delay).await;
        }
    }

    info!(
        collected = corpus.len(),
        failed,
        rejected,
        "Finished collecting articles"
    );
    corpus
}
