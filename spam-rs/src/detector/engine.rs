//! Spam detection engine
//!
//! Owns the loaded artifacts and runs the classification pipeline:
//! normalize, vectorize, predict.

use tracing::debug;

use crate::model::naive_bayes::{HAM, SPAM};
use crate::model::{ModelBundle, MultinomialNb, TfidfTransform};
use crate::preprocess::TextNormalizer;

use super::types::Verdict;

/// Spam detector built from a loaded artifact bundle.
///
/// Immutable after construction; a single instance is shared across all
/// requests.
pub struct SpamDetector {
    normalizer: TextNormalizer,
    vectorizer: TfidfTransform,
    model: MultinomialNb,
}

impl SpamDetector {
    /// Create a detector from loaded artifacts.
    pub fn new(bundle: ModelBundle) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            vectorizer: bundle.vectorizer,
            model: bundle.model,
        }
    }

    /// Classify a message.
    ///
    /// A message that normalizes to nothing (or contains only tokens outside
    /// the fitted vocabulary) is still classified; the model then answers
    /// from its class priors. Rejecting blank input is the caller's concern.
    pub fn classify(&self, text: &str) -> Verdict {
        let normalized = self.normalizer.normalize(text);
        let features = self.vectorizer.transform(&normalized);

        let predicted = self.model.predict(&features);
        let proba = self.model.predict_proba(&features);

        debug!(
            "{} known tokens, predicted class {}",
            features.len(),
            predicted
        );

        Verdict {
            is_spam: predicted == SPAM,
            spam_probability: proba[SPAM],
            ham_probability: proba[HAM],
        }
    }

    /// Size of the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.n_features()
    }
}
