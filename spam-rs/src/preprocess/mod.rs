//! Text preprocessing
//!
//! Normalizes raw message text into the token stream the vectorizer was
//! fitted on: lower-cased, stopword-free, stemmed.

pub mod normalizer;
pub mod stopwords;

pub use normalizer::TextNormalizer;
