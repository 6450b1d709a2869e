//! Artifact loading
//!
//! Reads the two serialized artifacts from disk, validates each, and
//! cross-checks that they agree on the feature dimension. Any inconsistency
//! is a startup error.

use std::path::Path;

use crate::error::{Result, SpamError};

use super::naive_bayes::{ClassifierArtifact, MultinomialNb};
use super::vectorizer::{TfidfArtifact, TfidfTransform};

/// The loaded vectorizer/classifier pair.
#[derive(Debug)]
pub struct ModelBundle {
    pub vectorizer: TfidfTransform,
    pub model: MultinomialNb,
}

impl ModelBundle {
    /// Load and validate both artifacts.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(vectorizer_path: P, model_path: Q) -> Result<Self> {
        let vectorizer = Self::load_vectorizer(vectorizer_path.as_ref())?;
        let model = Self::load_classifier(model_path.as_ref())?;

        if model.n_features() != vectorizer.n_features() {
            return Err(SpamError::Artifact(format!(
                "classifier expects {} features but vectorizer produces {}",
                model.n_features(),
                vectorizer.n_features()
            )));
        }

        Ok(Self { vectorizer, model })
    }

    fn load_vectorizer(path: &Path) -> Result<TfidfTransform> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SpamError::Artifact(format!("cannot read vectorizer {}: {}", path.display(), e))
        })?;
        let artifact: TfidfArtifact = serde_json::from_str(&content)?;
        TfidfTransform::from_artifact(artifact)
    }

    fn load_classifier(path: &Path) -> Result<MultinomialNb> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SpamError::Artifact(format!("cannot read model {}: {}", path.display(), e))
        })?;
        let artifact: ClassifierArtifact = serde_json::from_str(&content)?;
        MultinomialNb::from_artifact(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    #[test]
    fn test_load_rejects_dimension_mismatch() {
        let dir = tempfile::tempdir().unwrap();

        let vectorizer_path = dir.path().join("vectorizer.json");
        fs::write(
            &vectorizer_path,
            json!({
                "vocabulary": { "free": 0, "prize": 1 },
                "idf": [1.5, 2.0]
            })
            .to_string(),
        )
        .unwrap();

        let model_path = dir.path().join("model.json");
        fs::write(
            &model_path,
            json!({
                "class_log_prior": [-0.3, -1.2],
                "feature_log_prob": [[-1.0, -2.0, -3.0], [-1.0, -2.0, -3.0]]
            })
            .to_string(),
        )
        .unwrap();

        let err = ModelBundle::load(&vectorizer_path, &model_path).unwrap_err();
        assert!(err.to_string().contains("features"));
    }

    #[test]
    fn test_load_missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");

        let err = ModelBundle::load(&missing, &missing).unwrap_err();
        assert!(err.to_string().contains("nope.json"));
    }
}
