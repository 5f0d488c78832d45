//! Text normalization, diacritic stripping and tokenization.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::canonical_combining_class;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static NON_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zñ\s]").unwrap());

/// Collapse every whitespace run to a single space and trim both ends.
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE.replace_all(s, " ").trim().to_string()
}

/// Lowercase and collapse whitespace. Idempotent.
///
/// Diacritics are kept; this is the form written to the output records.
pub fn normalize_text(s: &str) -> String {
    collapse_whitespace(&s.to_lowercase())
}

/// Decompose (NFKD) and drop combining marks: `"Perú"` becomes `"Peru"`.
pub fn strip_diacritics(s: &str) -> String {
    s.nfkd()
        .filter(|c| canonical_combining_class(*c) == 0)
        .collect()
}

/// Lowercased, diacritic-free form used for every matching operation.
pub fn matching_form(s: &str) -> String {
    strip_diacritics(&s.to_lowercase())
}

/// Splits text into content words.
///
/// Tokens are runs of lowercase letters after diacritic stripping, at least
/// 3 characters long and not in the stopword set. Output order follows the
/// source text.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: HashSet<String>,
    min_len: usize,
}

impl Tokenizer {
    pub fn new<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stopwords: stopwords.into_iter().map(Into::into).collect(),
            min_len: 3,
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let stripped = matching_form(text);
        let letters_only = NON_LETTER.replace_all(&stripped, " ");
        letters_only
            .split_whitespace()
            .filter(|w| w.chars().count() >= self.min_len)
            .filter(|w| !self.is_stopword(w))
            .map(str::to_string)
            .collect()
    }
}
