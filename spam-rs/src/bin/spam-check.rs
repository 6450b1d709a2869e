//! CLI smoke-check for classification artifacts
//!
//! Loads the vectorizer/model pair and classifies a single message, printing
//! the verdict as JSON. Useful for verifying freshly exported artifacts
//! without starting the server.
//!
//! # Usage
//!
//! ```bash
//! # Classify a message given on the command line
//! spam-check "You have won a free prize, claim now!"
//!
//! # Read the message from stdin
//! cat message.txt | spam-check
//!
//! # Point at specific artifacts
//! spam-check --vectorizer export/vectorizer.json --model export/model.json "hi"
//! ```

use clap::Parser;
use spam_rs::detector::SpamDetector;
use spam_rs::error::SpamError;
use spam_rs::model::ModelBundle;
use std::io::Read;

#[derive(Parser)]
#[command(name = "spam-check")]
#[command(about = "Classify a message using trained artifacts", long_about = None)]
struct Cli {
    /// Path to the vectorizer artifact
    #[arg(long, default_value = "artifacts/vectorizer.json")]
    vectorizer: String,

    /// Path to the classifier artifact
    #[arg(long, default_value = "artifacts/model.json")]
    model: String,

    /// Message text; read from stdin when omitted
    message: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let text = match cli.message {
        Some(message) => message,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if text.trim().is_empty() {
        return Err(SpamError::EmptyMessage.into());
    }

    let bundle = ModelBundle::load(&cli.vectorizer, &cli.model)?;
    let detector = SpamDetector::new(bundle);

    let verdict = detector.classify(&text);
    println!("{}", serde_json::to_string_pretty(&verdict)?);

    Ok(())
}
