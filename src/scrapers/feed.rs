//! RSS feed reading with fallback across candidate endpoints.
//!
//! Endpoints are tried in order; the first one that returns at least one
//! item wins. A failing or empty endpoint is logged and skipped. Only when
//! every endpoint has been exhausted does acquisition fail.

use crate::analysis::normalize::collapse_whitespace;
use crate::error::CorpusError;
use crate::models::FeedItem;
use crate::scrapers::http::HttpClient;
use chrono::DateTime;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Items of the first endpoint that produced any, plus that endpoint.
#[derive(Debug, Clone)]
pub struct FeedSelection {
    pub feed_url: String,
    pub items: Vec<FeedItem>,
}

/// Dublin Core elements namespace, home of `creator`.
const DC_NAMESPACE: &[u8] = b"http://purl.org/dc/elements/1.1/";

/// Item child elements the reader keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemField {
    Title,
    Link,
    PubDate,
    Creator,
}

impl ItemField {
    /// Plain RSS elements must be unprefixed; `creator` is matched by
    /// namespace URI, whatever prefix the feed binds to it.
    fn from_element(ns: ResolveResult<'_>, local: &[u8]) -> Option<Self> {
        match (ns, local) {
            (ResolveResult::Unbound, b"title") => Some(Self::Title),
            (ResolveResult::Unbound, b"link") => Some(Self::Link),
            (ResolveResult::Unbound, b"pubDate") => Some(Self::PubDate),
            (ResolveResult::Bound(Namespace(uri)), b"creator") if uri == DC_NAMESPACE => {
                Some(Self::Creator)
            }
            _ => None,
        }
    }

    fn slot(self, item: &mut FeedItem) -> &mut String {
        match self {
            Self::Title => &mut item.title,
            Self::Link => &mut item.url,
            Self::PubDate => &mut item.publication_date_raw,
            Self::Creator => &mut item.author_feed,
        }
    }
}

/// Try each endpoint in order until one yields items.
///
/// # Errors
///
/// Returns [`CorpusError::NoFeedItems`] when every endpoint failed or was empty.
#[instrument(level = "info", skip_all, fields(candidates = feed_urls.len()))]
pub async fn read_first_available(
    client: &HttpClient,
    feed_urls: &[String],
) -> Result<FeedSelection, CorpusError> {
    for feed_url in feed_urls {
        match read_feed(client, feed_url).await {
            Ok(items) if !items.is_empty() => {
                info!(%feed_url, count = items.len(), "Read feed");
                return Ok(FeedSelection {
                    feed_url: feed_url.clone(),
                    items,
                });
            }
            Ok(_) => warn!(%feed_url, "Feed has no items; trying next endpoint"),
            Err(e) => warn!(%feed_url, error = %e, "Could not read feed; trying next endpoint"),
        }
    }
    Err(CorpusError::NoFeedItems {
        tried: feed_urls.len(),
    })
}

/// Fetch and parse one feed, resolving relative links against its url.
#[instrument(level = "debug", skip(client))]
pub async fn read_feed(client: &HttpClient, feed_url: &str) -> Result<Vec<FeedItem>, CorpusError> {
    let xml = client.get_text(feed_url).await?;
    let mut items = parse_feed_items(&xml)?;
    if let Ok(base) = Url::parse(feed_url) {
        for item in &mut items {
            if let Ok(resolved) = base.join(&item.url) {
                item.url = resolved.to_string();
            }
        }
    }
    debug!(count = items.len(), "Parsed feed items");
    Ok(items)
}

/// Parse the `<item>` elements of an RSS document, in document order.
///
/// Text and CDATA content are both accepted. Items without a link are
/// dropped. RFC 2822 publication dates are reduced to `yyyy-mm-dd`; other
/// date strings are kept as-is.
///
/// # Errors
///
/// Returns [`CorpusError::Xml`] if the document is malformed, including
/// undefined entity references, so the caller moves on to the next endpoint.
pub fn parse_feed_items(xml: &str) -> Result<Vec<FeedItem>, CorpusError> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut current: Option<FeedItem> = None;
    let mut field: Option<ItemField> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let (ns, local) = reader.resolve_element(e.name());
                if e.name().as_ref() == b"item" {
                    current = Some(FeedItem::default());
                    field = None;
                } else if current.is_some() {
                    field = ItemField::from_element(ns, local.as_ref());
                }
            }
            Event::End(e) => {
                if e.name().as_ref() == b"item" {
                    if let Some(item) = current.take().and_then(finish_item) {
                        items.push(item);
                    }
                }
                field = None;
            }
            Event::Text(e) => {
                // unescape every text node, so a bad entity anywhere rejects the feed
                let text = e.unescape()?;
                if let (Some(item), Some(f)) = (current.as_mut(), field) {
                    f.slot(item).push_str(&text);
                }
            }
            Event::CData(e) => {
                if let (Some(item), Some(f)) = (current.as_mut(), field) {
                    f.slot(item).push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(items)
}

fn finish_item(mut item: FeedItem) -> Option<FeedItem> {
    item.title = collapse_whitespace(&item.title);
    item.url = collapse_whitespace(&item.url);
    item.author_feed = collapse_whitespace(&item.author_feed);
    item.publication_date_raw = feed_date(&collapse_whitespace(&item.publication_date_raw));
    if item.url.is_empty() {
        debug!(title = %item.title, "Dropping feed item without link");
        return None;
    }
    Some(item)
}

/// `Tue, 28 Jan 2025 10:00:00 +0000` becomes `2025-01-28`; anything else passes through.
fn feed_date(raw: &str) -> String {
    match DateTime::parse_from_rfc2822(raw) {
        Ok(dt) => dt.date_naive().format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SAMPLE_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel>
    <title>Noticias ambientales</title>
    <link>https://example.com/</link>
    <item>
      <title>La   tala avanza en la Amazonía</title>
      <link>https://example.com/2025/01/tala</link>
      <pubDate>Tue, 28 Jan 2025 10:00:00 +0000</pubDate>
      <dc:creator><![CDATA[Ana Pérez]]></dc:creator>
      <category><![CDATA[Bosques]]></category>
    </item>
    <item>
      <title><![CDATA[Ríos y humedales]]></title>
      <link>https://example.com/2025/01/rios</link>
      <pubDate>ayer por la tarde</pubDate>
    </item>
    <item>
      <title>Sin enlace</title>
      <pubDate>Wed, 29 Jan 2025 10:00:00 +0000</pubDate>
    </item>
  </channel>
</rss>"#;

    fn rss_with_links(links: &[&str]) -> String {
        let items: String = links
            .iter()
            .map(|l| format!("<item><title>t</title><link>{l}</link></item>"))
            .collect();
        format!(r#"<?xml version="1.0"?><rss version="2.0"><channel>{items}</channel></rss>"#)
    }

    #[test]
    fn test_parse_extracts_fields_in_order() {
        let items = parse_feed_items(SAMPLE_RSS).unwrap();
        assert_eq!(items.len(), 2);

        assert_eq!(items[0].title, "La tala avanza en la Amazonía");
        assert_eq!(items[0].url, "https://example.com/2025/01/tala");
        assert_eq!(items[0].publication_date_raw, "2025-01-28");
        assert_eq!(items[0].author_feed, "Ana Pérez");

        assert_eq!(items[1].title, "Ríos y humedales");
        assert_eq!(items[1].url, "https://example.com/2025/01/rios");
        assert!(items[1].author_feed.is_empty());
    }

    #[test]
    fn test_parse_passes_unparseable_dates_through() {
        let items = parse_feed_items(SAMPLE_RSS).unwrap();
        assert_eq!(items[1].publication_date_raw, "ayer por la tarde");
    }

    #[test]
    fn test_parse_ignores_channel_level_fields() {
        let items = parse_feed_items(SAMPLE_RSS).unwrap();
        assert!(items.iter().all(|i| i.title != "Noticias ambientales"));
    }

    #[test]
    fn test_parse_empty_channel() {
        let xml = r#"<?xml version="1.0"?><rss version="2.0"><channel></channel></rss>"#;
        assert!(parse_feed_items(xml).unwrap().is_empty());
    }

    #[test]
    fn test_parse_mismatched_tags_is_error() {
        let xml = "<rss><channel><item><title>x</link></item></channel></rss>";
        assert!(matches!(parse_feed_items(xml), Err(CorpusError::Xml(_))));
    }

    #[test]
    fn test_feed_date_conversion() {
        assert_eq!(feed_date("Mon, 03 Feb 2025 23:59:00 -0500"), "2025-02-03");
        assert_eq!(feed_date("2025-02-03"), "2025-02-03");
        assert_eq!(feed_date(""), "");
    }

    #[tokio::test]
    async fn test_falls_back_to_next_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/empty"))
            .respond_with(ResponseTemplate::new(200).set_body_string(rss_with_links(&[])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/good"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(rss_with_links(&["https://example.com/a", "/relativo"])),
            )
            .mount(&server)
            .await;

        let client = HttpClient::new(&Config::default()).unwrap();
        let urls: Vec<String> = ["/broken", "/empty", "/good"]
            .iter()
            .map(|p| format!("{}{p}", server.uri()))
            .collect();

        let selection = read_first_available(&client, &urls).await.unwrap();
        assert_eq!(selection.feed_url, urls[2]);
        assert_eq!(selection.items.len(), 2);
        assert_eq!(selection.items[0].url, "https://example.com/a");
        assert_eq!(selection.items[1].url, format!("{}/relativo", server.uri()));
    }

    #[tokio::test]
    async fn test_all_endpoints_failing_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = HttpClient::new(&Config::default()).unwrap();
        let urls = vec![format!("{}/a", server.uri()), format!("{}/b", server.uri())];
        let result = read_first_available(&client, &urls).await;
        assert!(matches!(result, Err(CorpusError::NoFeedItems { tried: 2 })));
    }

    #[tokio::test]
    async fn test_no_endpoints_is_fatal() {
        let client = HttpClient::new(&Config::default()).unwrap();
        let result = read_first_available(&client, &[]).await;
        assert!(matches!(result, Err(CorpusError::NoFeedItems { tried: 0 })));
    }

    #[test]
    fn test_standard_entities_are_unescaped() {
        let xml = "<rss><channel><item><title>Ríos &amp; lagos</title>\
                   <link>https://example.com/a?x=1&amp;y=2</link></item></channel></rss>";
        let items = parse_feed_items(xml).unwrap();
        assert_eq!(items[0].title, "Ríos & lagos");
        assert_eq!(items[0].url, "https://example.com/a?x=1&y=2");
    }

    #[test]
    fn test_undefined_entity_rejects_document() {
        let xml = "<rss><channel><item><title>Hola&nbsp;mundo</title>\
                   <link>https://example.com/a</link></item></channel></rss>";
        assert!(matches!(parse_feed_items(xml), Err(CorpusError::Xml(_))));
    }

    #[test]
    fn test_undefined_entity_outside_kept_fields_rejects_document() {
        let xml = "<rss><channel><item><title>Hola</title><description>a&nbsp;b</description>\
                   <link>https://example.com/a</link></item></channel></rss>";
        assert!(matches!(parse_feed_items(xml), Err(CorpusError::Xml(_))));
    }

    #[test]
    fn test_creator_is_matched_by_namespace_uri() {
        let xml = r#"<rss xmlns:author="http://purl.org/dc/elements/1.1/"
                          xmlns:x="http://example.com/other"><channel>
              <item>
                <title>Uno</title><link>https://example.com/uno</link>
                <author:creator>Ana Pérez</author:creator>
              </item>
              <item>
                <title>Dos</title><link>https://example.com/dos</link>
                <x:creator>No es autor</x:creator>
              </item>
            </channel></rss>"#;
        let items = parse_feed_items(xml).unwrap();
        assert_eq!(items[0].author_feed, "Ana Pérez");
        assert!(items[1].author_feed.is_empty());
    }

    #[test]
    fn test_prefixed_link_does_not_replace_item_link() {
        let xml = r#"<rss xmlns:atom="http://www.w3.org/2005/Atom"><channel><item>
                <title>Uno</title>
                <link>https://example.com/uno</link>
                <atom:link>https://example.com/otro</atom:link>
            </item></channel></rss>"#;
        let items = parse_feed_items(xml).unwrap();
        assert_eq!(items[0].url, "https://example.com/uno");
    }

    #[tokio::test]
    async fn test_feed_with_bad_entity_falls_back_to_next_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/roto"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                "<rss><channel><item><title>a&nbsp;b</title>\
                 <link>https://example.com/roto</link></item></channel></rss>",
            ))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/bueno"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(rss_with_links(&["https://example.com/b"])),
            )
            .mount(&server)
            .await;

        let client = HttpClient::new(&Config::default()).unwrap();
        let urls = vec![format!("{}/roto", server.uri()), format!("{}/bueno", server.uri())];
        let selection = read_first_available(&client, &urls).await.unwrap();
        assert_eq!(selection.feed_url, urls[1]);
        assert_eq!(selection.items[0].url, "https://example.com/b");
    }

    #[tokio::test]
    async fn test_timed_out_endpoint_falls_back_to_next() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/lento"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(rss_with_links(&["https://example.com/tarde"]))
                    .set_delay(std::time::Duration::from_secs(3)),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rapido"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(rss_with_links(&["https://example.com/a"])),
            )
            .mount(&server)
            .await;

        let config = Config {
            request_timeout_secs: 1,
            ..Config::default()
        };
        let client = HttpClient::new(&config).unwrap();
        let urls = vec![format!("{}/lento", server.uri()), format!("{}/rapido", server.uri())];
        let selection = read_first_available(&client, &urls).await.unwrap();
        assert_eq!(selection.feed_url, urls[1]);
        assert_eq!(selection.items[0].url, "https://example.com/a");
    }
}
