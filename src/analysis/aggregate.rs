//! Frequency counting with reproducible tie-breaks.

use crate::models::{AggregateReport, CountEntry, EnrichedArticle};
use std::collections::HashMap;
use tracing::debug;

pub const ARTICLE_TOP_WORDS: usize = 5;
pub const CORPUS_TOP_WORDS: usize = 20;
pub const TOP_LABELS: usize = 5;

/// Counter that remembers the order in which values were first seen.
///
/// `most_common` sorts by count (descending) and breaks ties by first
/// insertion, so results never depend on hash iteration order.
#[derive(Debug, Default, Clone)]
pub struct FrequencyCounter {
    /// `(value, count)` in first-insertion order.
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: &str) {
        match self.index.get(value) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(value.to_string(), self.entries.len());
                self.entries.push((value.to_string(), 1));
            }
        }
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn most_common(&self, n: usize) -> Vec<CountEntry> {
        let mut ranked: Vec<&(String, usize)> = self.entries.iter().collect();
        // stable: equal counts keep insertion order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(value, count)| CountEntry::new(value.clone(), *count))
            .collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyCounter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counter = Self::new();
        counter.extend(iter);
        counter
    }
}

impl<S: AsRef<str>> Extend<S> for FrequencyCounter {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.add(value.as_ref());
        }
    }
}

/// The `n` most frequent tokens, most frequent first.
pub fn top_words<S: AsRef<str>>(tokens: &[S], n: usize) -> Vec<String> {
    tokens
        .iter()
        .map(AsRef::<str>::as_ref)
        .collect::<FrequencyCounter>()
        .most_common(n)
        .into_iter()
        .map(|e| e.value)
        .collect()
}

/// Build the corpus report.
///
/// `corpus_tokens` is the concatenation of every article's body tokens, so
/// the word table counts across the whole corpus rather than per article.
pub fn build_report<S: AsRef<str>>(
    articles: &[EnrichedArticle],
    corpus_tokens: &[S],
) -> AggregateReport {
    let topics: FrequencyCounter = articles.iter().map(|a| a.topic.as_str()).collect();
    let countries: FrequencyCounter = articles.iter().map(|a| a.country.as_str()).collect();
    let words: FrequencyCounter = corpus_tokens.iter().map(AsRef::<str>::as_ref).collect();
    debug!(
        topics = topics.len(),
        countries = countries.len(),
        distinct_words = words.len(),
        "Built frequency tables"
    );

    AggregateReport {
        top_topics: topics.most_common(TOP_LABELS),
        top_countries: countries.most_common(TOP_LABELS),
        top_words: words.most_common(CORPUS_TOP_WORDS),
    }
}
