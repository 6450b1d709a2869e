use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpamError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid artifact: {0}")]
    Artifact(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Message is empty")]
    EmptyMessage,
}

pub type Result<T> = std::result::Result<T, SpamError>;
