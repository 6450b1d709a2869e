//! Message text normalization
//!
//! Reproduces the normalization the artifact-fitting pipeline applied to its
//! training corpus: lower-case, split into alphanumeric tokens, drop
//! stopwords, stem what remains.

use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;

use super::stopwords::stopword_set;

/// Normalizes raw message text into a space-joined stream of stems.
pub struct TextNormalizer {
    stemmer: Stemmer,
    stopwords: HashSet<&'static str>,
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
            stopwords: stopword_set(),
        }
    }

    /// Normalize a message. Empty input produces empty output.
    ///
    /// The stopword check runs on the raw lower-cased token; stemming is
    /// applied afterwards. Punctuation disappears with the split.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();

        lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .filter(|token| !self.stopwords.contains(token))
            .map(|token| self.stemmer.stem(token).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_stems() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("Winning Meetings"), "win meet");
    }

    #[test]
    fn test_drops_stopwords_and_punctuation() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.normalize("You have won a FREE prize!!!"),
            "free prize"
        );
    }

    #[test]
    fn test_keeps_numeric_tokens() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("Call 08001234567 today"), "call 08001234567 today");
    }

    #[test]
    fn test_empty_input() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("   \t\n"), "");
    }

    #[test]
    fn test_stopword_only_input() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("is it you or me"), "");
    }

    #[test]
    fn test_contractions_break_into_stopword_fragments() {
        let normalizer = TextNormalizer::new();
        // "don't" splits into "don" and "t", both stopwords
        assert_eq!(normalizer.normalize("Don't miss it"), "miss");
    }
}
