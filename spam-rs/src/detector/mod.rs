//! Spam detection pipeline
//!
//! Wires normalization, vectorization, and prediction into the single
//! classify operation the API exposes.

pub mod engine;
pub mod types;

pub use engine::SpamDetector;
pub use types::{DetectorStats, Verdict};
