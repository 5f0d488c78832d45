//! Article page scraping.
//!
//! Body, byline and date are each located with an ordered list of CSS
//! selectors, most specific first. The first selector that yields something
//! wins; when none does, the value from the feed item is used instead.

use crate::analysis::normalize::collapse_whitespace;
use crate::error::CorpusError;
use crate::models::{FeedItem, RawArticle};
use crate::scrapers::http::HttpClient;
use itertools::Itertools;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

/// Containers that hold the article body on common CMS themes.
pub const BODY_SELECTORS: &[&str] = &[
    "div.entry-content",
    "article .entry-content",
    "div.td-post-content",
    "div.post-content",
    "div.single-content",
    "article",
];

/// Byline markup, most specific first.
pub const AUTHOR_SELECTORS: &[&str] = &[
    "a[rel='author']",
    ".author a",
    ".byline a",
    ".byline",
    ".author-name",
    "span.author",
];

static BODY: Lazy<SelectorCascade> = Lazy::new(|| SelectorCascade::new(BODY_SELECTORS));
static AUTHOR: Lazy<SelectorCascade> = Lazy::new(|| SelectorCascade::new(AUTHOR_SELECTORS));
static TEXT_BLOCKS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p, h2, h3, li").expect("static selector"));
static TIMESTAMP: Lazy<Selector> =
    Lazy::new(|| Selector::parse("time[datetime]").expect("static selector"));

/// An ordered list of selectors tried until one produces a result.
#[derive(Debug)]
pub struct SelectorCascade {
    selectors: Vec<Selector>,
}

impl SelectorCascade {
    /// Compile `patterns`; they are static literals, so a parse failure is a bug.
    pub fn new(patterns: &[&str]) -> Self {
        let selectors = patterns
            .iter()
            .map(|p| Selector::parse(p).expect("static selector"))
            .collect();
        Self { selectors }
    }

    /// First element of the earliest selector that matches anything.
    pub fn first_element<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        self.selectors
            .iter()
            .find_map(|selector| document.select(selector).next())
    }

    /// First non-empty value of `extract` applied to each selector's first match.
    pub fn first_value<F>(&self, document: &Html, extract: F) -> Option<String>
    where
        F: Fn(ElementRef<'_>) -> String,
    {
        self.selectors
            .iter()
            .filter_map(|selector| document.select(selector).next())
            .map(extract)
            .find(|value| !value.is_empty())
    }
}

/// Space-joined, whitespace-collapsed text of an element and its descendants.
fn element_text(element: ElementRef<'_>) -> String {
    let joined = element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .join(" ");
    collapse_whitespace(&joined)
}

/// Text of the paragraphs, subheadings and list items inside the body container.
pub fn extract_body(document: &Html) -> String {
    let Some(container) = BODY.first_element(document) else {
        return String::new();
    };
    let joined = container
        .select(&TEXT_BLOCKS)
        .map(element_text)
        .filter(|t| !t.is_empty())
        .join(" ");
    collapse_whitespace(&joined)
}

pub fn extract_author(document: &Html) -> Option<String> {
    AUTHOR.first_value(document, element_text)
}

/// Date part of the first `<time datetime="…">`, without time of day or zone.
pub fn extract_date(document: &Html) -> Option<String> {
    document
        .select(&TIMESTAMP)
        .next()
        .and_then(|el| el.value().attr("datetime"))
        .map(collapse_whitespace)
        .and_then(|stamp| stamp.split('T').next().map(str::to_string))
        .filter(|date| !date.is_empty())
}

/// Build a [`RawArticle`] from page HTML, falling back to feed metadata.
///
/// The quality gate is not applied here.
pub fn extract_article(html: &str, item: &FeedItem) -> RawArticle {
    let document = Html::parse_document(html);
    let body_text = extract_body(&document);
    let author = extract_author(&document).unwrap_or_else(|| item.author_feed.clone());
    let date_raw = extract_date(&document).unwrap_or_else(|| item.publication_date_raw.clone());

    RawArticle {
        title: item.title.clone(),
        date_raw,
        url: item.url.clone(),
        author,
        body_text,
    }
}

/// Fetch one article page and extract it.
///
/// # Errors
///
/// Returns [`CorpusError::Http`] on timeouts, transport failures and non-2xx
/// statuses. Callers treat any error as "skip this item".
#[instrument(level = "debug", skip_all, fields(url = %item.url))]
pub async fn fetch_article(client: &HttpClient, item: &FeedItem) -> Result<RawArticle, CorpusError> {
    let html = client.get_text(&item.url).await?;
    let article = extract_article(&html, item);
    debug!(
        chars = article.body_text.chars().count(),
        author = %article.author,
        date = %article.date_raw,
        "Parsed article"
    );
    Ok(article)
}
