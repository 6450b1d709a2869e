//! Pre-trained multinomial naive Bayes classifier
//!
//! Holds the log priors and per-class feature log probabilities produced by
//! an external training run. Prediction is a sparse dot product per class
//! followed by an argmax; probabilities come from log-sum-exp normalization.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpamError};

/// Column index of the ham class in the artifact.
pub const HAM: usize = 0;
/// Column index of the spam class in the artifact.
pub const SPAM: usize = 1;

/// Serialized form of a trained classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    /// Log prior per class, ham first.
    pub class_log_prior: Vec<f64>,
    /// Per-class, per-feature log probabilities.
    pub feature_log_prob: Vec<Vec<f64>>,
}

/// Multinomial naive Bayes inference over sparse feature vectors.
#[derive(Debug)]
pub struct MultinomialNb {
    class_log_prior: Vec<f64>,
    feature_log_prob: Vec<Vec<f64>>,
}

impl MultinomialNb {
    /// Validate an artifact and build the classifier.
    ///
    /// Exactly two classes are expected (ham, spam), and every class row
    /// must have the same feature dimension.
    pub fn from_artifact(artifact: ClassifierArtifact) -> Result<Self> {
        if artifact.class_log_prior.len() != 2 || artifact.feature_log_prob.len() != 2 {
            return Err(SpamError::Artifact(format!(
                "expected 2 classes, got {} priors and {} probability rows",
                artifact.class_log_prior.len(),
                artifact.feature_log_prob.len()
            )));
        }

        let n_features = artifact.feature_log_prob[HAM].len();
        if artifact.feature_log_prob[SPAM].len() != n_features {
            return Err(SpamError::Artifact(format!(
                "class probability rows disagree on feature count: {} vs {}",
                n_features,
                artifact.feature_log_prob[SPAM].len()
            )));
        }

        Ok(Self {
            class_log_prior: artifact.class_log_prior,
            feature_log_prob: artifact.feature_log_prob,
        })
    }

    /// Feature dimension the classifier was trained on.
    pub fn n_features(&self) -> usize {
        self.feature_log_prob[HAM].len()
    }

    /// Joint log likelihood of the sample under each class.
    fn joint_log_likelihood(&self, features: &[(usize, f64)]) -> [f64; 2] {
        let mut jll = [self.class_log_prior[HAM], self.class_log_prior[SPAM]];

        for &(idx, weight) in features {
            jll[HAM] += weight * self.feature_log_prob[HAM][idx];
            jll[SPAM] += weight * self.feature_log_prob[SPAM][idx];
        }

        jll
    }

    /// Predicted class index (argmax of the joint log likelihood).
    ///
    /// An empty feature vector falls back to the class priors.
    pub fn predict(&self, features: &[(usize, f64)]) -> usize {
        let jll = self.joint_log_likelihood(features);
        if jll[SPAM] > jll[HAM] {
            SPAM
        } else {
            HAM
        }
    }

    /// Probability per class, ham first. The pair sums to 1.
    pub fn predict_proba(&self, features: &[(usize, f64)]) -> [f64; 2] {
        let jll = self.joint_log_likelihood(features);

        // log-sum-exp, anchored at the max for numerical stability
        let max = jll[HAM].max(jll[SPAM]);
        let ham = (jll[HAM] - max).exp();
        let spam = (jll[SPAM] - max).exp();
        let total = ham + spam;

        [ham / total, spam / total]
    }
}
