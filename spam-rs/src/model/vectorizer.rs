//! Pre-fitted TF-IDF transform
//!
//! Inference-only counterpart of a fitted TF-IDF vectorizer: the vocabulary
//! and IDF weights come from the artifact, this code only applies them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Result, SpamError};

/// Serialized form of a fitted vectorizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfArtifact {
    /// Token -> column index.
    pub vocabulary: HashMap<String, usize>,
    /// IDF weight per column.
    pub idf: Vec<f64>,
}

/// Applies a fitted TF-IDF transform to normalized text.
#[derive(Debug)]
pub struct TfidfTransform {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfTransform {
    /// Validate an artifact and build the transform.
    ///
    /// The vocabulary must map onto columns 0..n without gaps or duplicates,
    /// and the IDF vector must cover exactly those columns.
    pub fn from_artifact(artifact: TfidfArtifact) -> Result<Self> {
        let n = artifact.vocabulary.len();

        if artifact.idf.len() != n {
            return Err(SpamError::Artifact(format!(
                "vectorizer has {} vocabulary entries but {} idf weights",
                n,
                artifact.idf.len()
            )));
        }

        let mut seen = vec![false; n];
        for (token, &idx) in &artifact.vocabulary {
            if idx >= n {
                return Err(SpamError::Artifact(format!(
                    "vocabulary index {} for token {:?} out of range (vocabulary size {})",
                    idx, token, n
                )));
            }
            if seen[idx] {
                return Err(SpamError::Artifact(format!(
                    "duplicate vocabulary index {}",
                    idx
                )));
            }
            seen[idx] = true;
        }

        Ok(Self {
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
        })
    }

    /// Number of feature columns.
    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// Transform normalized text into a sparse feature vector.
    ///
    /// Term counts of known tokens are weighted by IDF and L2-normalized;
    /// tokens outside the fitted vocabulary are ignored. Entries come back
    /// sorted by column index.
    pub fn transform(&self, normalized: &str) -> Vec<(usize, f64)> {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in normalized.split_whitespace() {
            if let Some(&idx) = self.vocabulary.get(token) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(idx, count)| (idx, count * self.idf[idx]))
            .collect();

        let norm: f64 = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut entries {
                *w /= norm;
            }
        }

        entries.sort_by_key(|&(idx, _)| idx);
        entries
    }
}
