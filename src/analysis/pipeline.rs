//! Turns a raw corpus into enriched records and a corpus report.

use crate::analysis::aggregate::{ARTICLE_TOP_WORDS, build_report, top_words};
use crate::analysis::classify::{CountryClassifier, TopicClassifier};
use crate::analysis::dates::canonicalize_date;
use crate::analysis::normalize::{Tokenizer, normalize_text};
use crate::config::Config;
use crate::error::CorpusError;
use crate::models::{AggregateReport, EnrichedArticle, RawArticle};
use itertools::Itertools;
use tracing::{debug, info, instrument};

/// Normalization and classification state, built once per run.
#[derive(Debug, Clone)]
pub struct Analyzer {
    tokenizer: Tokenizer,
    topics: TopicClassifier,
    countries: CountryClassifier,
    no_date_label: String,
    unknown_author_label: String,
}

impl Analyzer {
    pub fn new(config: &Config) -> Result<Self, CorpusError> {
        Ok(Self {
            tokenizer: Tokenizer::new(config.stopwords.iter().cloned()),
            topics: TopicClassifier::new(&config.topics, config.uncategorized_label.clone()),
            countries: CountryClassifier::new(
                &config.countries,
                &config.country_display,
                config.unspecified_country_label.clone(),
            )?,
            no_date_label: config.no_date_label.clone(),
            unknown_author_label: config.unknown_author_label.clone(),
        })
    }

    /// Normalize, classify and count one article.
    pub fn enrich(&self, raw: &RawArticle) -> EnrichedArticle {
        let title = normalize_text(&raw.title);
        let body = normalize_text(&raw.body_text);

        let date = canonicalize_date(&raw.date_raw, &self.no_date_label);
        let author = raw.author.trim();
        let author_missing = author.is_empty();

        let tokens = self.tokenizer.tokenize(&body);
        let full_text = format!("{title} {body}");

        EnrichedArticle {
            url: raw.url.clone(),
            author: if author_missing {
                self.unknown_author_label.clone()
            } else {
                author.to_string()
            },
            author_missing,
            date_raw: raw.date_raw.clone(),
            date_canonical: date.display,
            date_missing: date.missing,
            topic: self.topics.classify(&full_text),
            country: self.countries.classify(&full_text),
            top5_words: top_words(&tokens, ARTICLE_TOP_WORDS),
            word_count: tokens.len(),
            title,
            body_text: body,
        }
    }

    /// Enrich a corpus and compute its report.
    ///
    /// Duplicate urls are dropped first (first occurrence kept), so a raw
    /// CSV assembled by hand gets the same guarantee as a collected corpus.
    #[instrument(level = "info", skip_all, fields(articles = corpus.len()))]
    pub fn process(&self, corpus: &[RawArticle]) -> (Vec<EnrichedArticle>, AggregateReport) {
        let unique: Vec<&RawArticle> = corpus.iter().unique_by(|a| a.url.clone()).collect();
        if unique.len() < corpus.len() {
            debug!(
                dropped = corpus.len() - unique.len(),
                "Dropped duplicate urls before processing"
            );
        }

        let enriched: Vec<EnrichedArticle> = unique.iter().map(|raw| self.enrich(raw)).collect();
        let corpus_tokens: Vec<String> = enriched
            .iter()
            .flat_map(|a| self.tokenizer.tokenize(&a.body_text))
            .collect();
        let report = build_report(&enriched, &corpus_tokens);

        info!(
            processed = enriched.len(),
            tokens = corpus_tokens.len(),
            distinct_topics = enriched.iter().map(|a| &a.topic).unique().count(),
            "Processed corpus"
        );
        (enriched, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CountEntry;

    fn analyzer() -> Analyzer {
        Analyzer::new(&Config::default()).unwrap()
    }

    fn raw(url: &str, title: &str, body: &str) -> RawArticle {
        RawArticle {
            title: title.to_string(),
            date_raw: "2025-01-28".to_string(),
            url: url.to_string(),
            author: "Ana Pérez".to_string(),
            body_text: body.to_string(),
        }
    }

    #[test]
    fn test_enrich_normalizes_and_classifies() {
        let a = analyzer();
        let article = a.enrich(&raw(
            "https://example.com/1",
            "  Incendios en la AMAZONÍA  ",
            "Los incendios y la tala destruyen el bosque en Bolivia.",
        ));
        assert_eq!(article.title, "incendios en la amazonía");
        assert_eq!(article.date_canonical, "28/01/2025");
        assert!(!article.date_missing);
        assert_eq!(article.topic, "Deforestación y bosques");
        assert_eq!(article.country, "Bolivia");
        assert_eq!(article.author, "Ana Pérez");
    }

    #[test]
    fn test_enrich_counts_body_tokens_only() {
        let a = analyzer();
        let article = a.enrich(&raw(
            "https://example.com/2",
            "titular extenso irrelevante",
            "selva selva lluvia de la selva",
        ));
        assert_eq!(article.word_count, 4);
        assert_eq!(article.top5_words, vec!["selva", "lluvia"]);
    }

    #[test]
    fn test_enrich_fills_missing_author_and_date() {
        let a = analyzer();
        let mut input = raw("https://example.com/3", "t", "texto");
        input.author = "   ".to_string();
        input.date_raw = "sometime".to_string();
        let article = a.enrich(&input);
        assert_eq!(article.author, "unknown");
        assert!(article.author_missing);
        assert_eq!(article.date_canonical, "no date");
        assert!(article.date_missing);
    }

    #[test]
    fn test_enrich_is_total_on_empty_article() {
        let article = analyzer().enrich(&RawArticle::default());
        assert_eq!(article.topic, "uncategorized");
        assert_eq!(article.country, "regional/unspecified");
        assert_eq!(article.word_count, 0);
        assert!(article.top5_words.is_empty());
    }

    #[test]
    fn test_process_drops_duplicate_urls() {
        let corpus = vec![
            raw("https://example.com/a", "uno", "agua del río"),
            raw("https://example.com/a", "dos", "otro texto"),
            raw("https://example.com/b", "tres", "minería de oro"),
        ];
        let (enriched, _) = analyzer().process(&corpus);
        assert_eq!(enriched.len(), 2);
        assert_eq!(enriched[0].title, "uno");
        assert_eq!(enriched[1].url, "https://example.com/b");
    }

    #[test]
    fn test_process_reports_topics_and_words() {
        let corpus = vec![
            raw("https://example.com/a", "", "agua agua laguna"),
            raw("https://example.com/b", "", "contaminación del agua"),
            raw("https://example.com/c", "", "minería de cobre"),
        ];
        let (_, report) = analyzer().process(&corpus);
        assert_eq!(
            report.top_topics,
            vec![
                CountEntry::new("Agua y contaminación", 2),
                CountEntry::new("Minería y extractivismo", 1),
            ]
        );
        assert_eq!(report.top_words[0], CountEntry::new("agua", 3));
        assert_eq!(
            report.top_countries,
            vec![CountEntry::new("regional/unspecified", 3)]
        );
    }
}
