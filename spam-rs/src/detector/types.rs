//! Detector types and data structures

use serde::{Deserialize, Serialize};

/// Classification result for a single message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    /// Did the classifier call this message spam
    pub is_spam: bool,
    /// Probability of the spam class
    pub spam_probability: f64,
    /// Probability of the ham class
    pub ham_probability: f64,
}

impl Verdict {
    /// Probability of the predicted class. This is the number the UI shows.
    pub fn confidence(&self) -> f64 {
        if self.is_spam {
            self.spam_probability
        } else {
            self.ham_probability
        }
    }

    /// Short label for the predicted class.
    pub fn label(&self) -> &'static str {
        if self.is_spam {
            "spam"
        } else {
            "ham"
        }
    }
}

/// In-memory usage counters. Reset on restart, never persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DetectorStats {
    /// Total messages classified
    pub messages_scanned: u64,
    /// Messages classified as spam
    pub spam_detected: u64,
    /// Messages classified as ham
    pub ham_detected: u64,
}

impl DetectorStats {
    pub fn record(&mut self, verdict: &Verdict) {
        self.messages_scanned += 1;
        if verdict.is_spam {
            self.spam_detected += 1;
        } else {
            self.ham_detected += 1;
        }
    }
}
