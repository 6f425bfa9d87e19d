//! Text normalization, tokenization and term matching.

use std::collections::HashSet;

/// Lower-case the text and drop every character that is neither a word
/// character (alphanumeric or `_`) nor whitespace.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

/// Normalize and split on runs of whitespace. Empty input yields no tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(|s| s.to_string())
        .collect()
}

/// Lower-cased raw text with whitespace runs collapsed to single spaces.
///
/// Punctuation is kept so phrases such as "long-term impact" still match.
pub fn phrase_text(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of non-overlapping occurrences of `phrase` in `haystack`.
pub fn count_phrase(haystack: &str, phrase: &str) -> usize {
    if phrase.is_empty() {
        return 0;
    }
    haystack.matches(phrase).count()
}

/// A fixed set of single-token terms, matched by exact token membership.
#[derive(Debug, Clone, Default)]
pub struct TermSet {
    terms: HashSet<String>,
}

impl TermSet {
    /// Build from configured terms. Each term goes through [`normalize`] so
    /// "Hands-on" in a config matches the token "handson".
    pub fn new<S: AsRef<str>>(terms: &[S]) -> Self {
        let terms = terms
            .iter()
            .map(|t| normalize(t.as_ref()).trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        TermSet { terms }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.terms.contains(token)
    }

    /// Count the tokens that belong to this set.
    pub fn count(&self, tokens: &[String]) -> u32 {
        tokens.iter().filter(|t| self.terms.contains(t.as_str())).count() as u32
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
