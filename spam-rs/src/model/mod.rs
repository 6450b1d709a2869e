//! Pre-trained classification artifacts
//!
//! The vectorizer and the classifier are fitted by an external training
//! pipeline and loaded here as opaque, immutable artifacts. This module only
//! implements the inference half: transform and predict.

pub mod bundle;
pub mod naive_bayes;
pub mod vectorizer;

pub use bundle::ModelBundle;
pub use naive_bayes::MultinomialNb;
pub use vectorizer::TfidfTransform;
