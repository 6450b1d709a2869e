use spam_rs::api::ApiServer;
use spam_rs::config::Config;
use spam_rs::detector::SpamDetector;
use spam_rs::model::ModelBundle;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = if std::path::Path::new("config.toml").exists() {
        Config::from_file("config.toml")?
    } else {
        Config::default()
    };

    // Initialize logging
    let level: Level = config.logging.level.parse().unwrap_or(Level::INFO);
    if config.logging.format == "json" {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .pretty()
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
    }

    info!("Starting spam-rs server");
    info!("  Listening on: {}", config.server.listen_addr);
    info!("  Vectorizer: {}", config.artifacts.vectorizer_path);
    info!("  Model: {}", config.artifacts.model_path);

    // Load artifacts
    let bundle = ModelBundle::load(
        &config.artifacts.vectorizer_path,
        &config.artifacts.model_path,
    )?;

    let detector = Arc::new(SpamDetector::new(bundle));
    info!(
        "Artifacts loaded ({} vocabulary tokens)",
        detector.vocabulary_size()
    );

    // Start API server
    let server = ApiServer::new(detector, config.server.listen_addr.clone());
    server.run().await?;

    Ok(())
}
