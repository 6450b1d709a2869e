//! Detector pipeline tests against a small fixture artifact pair.

use serde_json::json;
use spam_rs::detector::SpamDetector;
use spam_rs::model::ModelBundle;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a small but complete artifact pair and return their paths.
///
/// Vocabulary tokens are stems, since the vectorizer operates on
/// normalized text. Class order is ham first, spam second.
fn write_artifacts(dir: &TempDir) -> (PathBuf, PathBuf) {
    let vectorizer_path = dir.path().join("vectorizer.json");
    fs::write(
        &vectorizer_path,
        json!({
            "vocabulary": {
                "free": 0, "cash": 1, "prize": 2, "claim": 3, "winner": 4,
                "lunch": 5, "meet": 6, "tomorrow": 7, "report": 8
            },
            "idf": [1.2, 1.5, 1.8, 2.0, 2.2, 1.3, 1.4, 1.1, 1.6]
        })
        .to_string(),
    )
    .unwrap();

    let model_path = dir.path().join("model.json");
    fs::write(
        &model_path,
        json!({
            "class_log_prior": [(0.7f64).ln(), (0.3f64).ln()],
            "feature_log_prob": [
                [-6.0, -6.2, -6.5, -6.0, -7.0, -2.2, -2.0, -1.8, -2.5],
                [-2.0, -2.1, -2.2, -2.4, -2.6, -6.5, -6.0, -5.5, -6.8]
            ]
        })
        .to_string(),
    )
    .unwrap();

    (vectorizer_path, model_path)
}

fn build_detector(dir: &TempDir) -> SpamDetector {
    let (vectorizer_path, model_path) = write_artifacts(dir);
    let bundle = ModelBundle::load(&vectorizer_path, &model_path).unwrap();
    SpamDetector::new(bundle)
}

#[test]
fn test_spammy_message_is_spam() {
    let dir = tempfile::tempdir().unwrap();
    let detector = build_detector(&dir);

    let verdict =
        detector.classify("Congratulations! You have won a FREE cash prize. Claim your prize now!");

    assert!(verdict.is_spam);
    assert_eq!(verdict.label(), "spam");
    assert!(verdict.confidence() > 0.9);
    assert!((verdict.spam_probability + verdict.ham_probability - 1.0).abs() < 1e-9);
}

#[test]
fn test_hammy_message_is_ham() {
    let dir = tempfile::tempdir().unwrap();
    let detector = build_detector(&dir);

    let verdict = detector.classify("Lunch meeting tomorrow, please send the report");

    assert!(!verdict.is_spam);
    assert_eq!(verdict.label(), "ham");
    assert!(verdict.confidence() > 0.9);
}

#[test]
fn test_empty_message_falls_back_to_priors() {
    let dir = tempfile::tempdir().unwrap();
    let detector = build_detector(&dir);

    let verdict = detector.classify("");

    // With no features, the model answers from its class priors (0.7 ham).
    assert!(!verdict.is_spam);
    assert!((verdict.ham_probability - 0.7).abs() < 1e-9);
    assert!((verdict.spam_probability - 0.3).abs() < 1e-9);
}

#[test]
fn test_out_of_vocabulary_message_falls_back_to_priors() {
    let dir = tempfile::tempdir().unwrap();
    let detector = build_detector(&dir);

    let verdict = detector.classify("xylophone quasar nebula");

    assert!(!verdict.is_spam);
    assert!((verdict.ham_probability - 0.7).abs() < 1e-9);
}

#[test]
fn test_case_and_punctuation_do_not_change_the_verdict() {
    let dir = tempfile::tempdir().unwrap();
    let detector = build_detector(&dir);

    let shouting = detector.classify("FREE CASH PRIZE!!! CLAIM NOW!!!");
    let quiet = detector.classify("free cash prize claim now");

    assert_eq!(shouting.is_spam, quiet.is_spam);
    assert!((shouting.spam_probability - quiet.spam_probability).abs() < 1e-9);
}

#[test]
fn test_vocabulary_size_reported() {
    let dir = tempfile::tempdir().unwrap();
    let detector = build_detector(&dir);

    assert_eq!(detector.vocabulary_size(), 9);
}
