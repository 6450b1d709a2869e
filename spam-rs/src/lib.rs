//! spam-rs: Email/SMS spam classification service
//!
//! Classifies pasted email or SMS messages as spam or ham using pre-trained
//! artifacts: a fitted TF-IDF vectorizer and a multinomial naive Bayes
//! classifier, both produced by an external training pipeline and loaded
//! from disk at startup.
//!
//! # Features
//!
//! - **Web UI**: Paste a message, get a verdict with confidence
//! - **JSON API**: `/api/classify` for programmatic access
//! - **Preprocessing**: Stopword removal and stemming matching the
//!   pipeline the artifacts were fitted with
//!
//! # Example
//!
//! ```no_run
//! use spam_rs::config::Config;
//! use spam_rs::detector::SpamDetector;
//! use spam_rs::model::ModelBundle;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let bundle = ModelBundle::load(
//!         &config.artifacts.vectorizer_path,
//!         &config.artifacts.model_path,
//!     )?;
//!
//!     let detector = SpamDetector::new(bundle);
//!     let verdict = detector.classify("You have won a free prize, claim now!");
//!     println!("{}: {:.2}%", verdict.label(), verdict.confidence() * 100.0);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`preprocess`]: Text normalization
//! - [`model`]: Artifact loading and inference
//! - [`detector`]: The classification pipeline
//! - [`api`]: HTTP server, web UI, and JSON endpoints

pub mod api;
pub mod config;
pub mod detector;
pub mod error;
pub mod model;
pub mod preprocess;

// Re-export commonly used types
pub use config::Config;
pub use detector::{SpamDetector, Verdict};
pub use error::{Result, SpamError};
pub use model::ModelBundle;
