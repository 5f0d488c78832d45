//! Keyword-based topic and country heuristics.
//!
//! Both classifiers are built once from [`Config`](crate::config::Config)
//! and are total: every input text resolves to a label, falling back to a
//! catch-all when nothing matches.

use crate::analysis::normalize::matching_form;
use crate::config::TopicKeywords;
use crate::error::CorpusError;
use crate::utils::title_case;
use regex::Regex;
use std::collections::BTreeMap;

/// Scores text against an ordered keyword dictionary.
#[derive(Debug, Clone)]
pub struct TopicClassifier {
    /// Topic name and its keywords in matching form, in dictionary order.
    topics: Vec<(String, Vec<String>)>,
    fallback: String,
}

impl TopicClassifier {
    pub fn new(topics: &[TopicKeywords], fallback: impl Into<String>) -> Self {
        let topics = topics
            .iter()
            .map(|t| {
                let keywords = t
                    .keywords
                    .iter()
                    .map(|k| matching_form(k))
                    .filter(|k| !k.trim().is_empty())
                    .collect();
                (t.name.clone(), keywords)
            })
            .collect();
        Self {
            topics,
            fallback: fallback.into(),
        }
    }

    /// Per-topic scores in dictionary order.
    ///
    /// A topic's score sums, over its keywords, the non-overlapping
    /// substring occurrences of the keyword in the text.
    pub fn scores(&self, text: &str) -> Vec<(&str, usize)> {
        let haystack = matching_form(text);
        self.topics
            .iter()
            .map(|(name, keywords)| {
                let score = keywords
                    .iter()
                    .map(|k| haystack.matches(k.as_str()).count())
                    .sum();
                (name.as_str(), score)
            })
            .collect()
    }

    /// Highest-scoring topic, or the fallback label when every score is 0.
    ///
    /// Ties go to the topic declared first.
    pub fn classify(&self, text: &str) -> String {
        let mut best: Option<(&str, usize)> = None;
        for (name, score) in self.scores(text) {
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((name, score));
            }
        }
        match best {
            Some((name, score)) if score > 0 => name.to_string(),
            _ => self.fallback.clone(),
        }
    }
}

/// Tags text with the first country or region of an ordered list that it mentions.
#[derive(Debug, Clone)]
pub struct CountryClassifier {
    /// Whole-word pattern and display label, in list order.
    patterns: Vec<(Regex, String)>,
    fallback: String,
}

impl CountryClassifier {
    /// Compile one word-boundary pattern per entry.
    ///
    /// `display` is keyed by the entry's matching form; entries without a
    /// display override are title-cased.
    pub fn new(
        countries: &[String],
        display: &BTreeMap<String, String>,
        fallback: impl Into<String>,
    ) -> Result<Self, CorpusError> {
        let mut patterns = Vec::with_capacity(countries.len());
        for entry in countries {
            let key = matching_form(entry);
            if key.trim().is_empty() {
                continue;
            }
            let pattern = format!(r"\b{}\b", regex::escape(&key));
            let regex = Regex::new(&pattern).map_err(|source| CorpusError::Pattern {
                entry: entry.clone(),
                source,
            })?;
            let label = display
                .get(&key)
                .cloned()
                .unwrap_or_else(|| title_case(entry));
            patterns.push((regex, label));
        }
        Ok(Self {
            patterns,
            fallback: fallback.into(),
        })
    }

    /// First list entry found in the text; list order decides, not counts.
    pub fn classify(&self, text: &str) -> String {
        let haystack = matching_form(text);
        self.patterns
            .iter()
            .find(|(regex, _)| regex.is_match(&haystack))
            .map(|(_, label)| label.clone())
            .unwrap_or_else(|| self.fallback.clone())
    }
}
