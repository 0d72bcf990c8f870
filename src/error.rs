use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Invalid list ID: {0}")]
    InvalidListId(String),

    #[error("Invalid card ID: {0}")]
    InvalidCardId(String),

    #[error("Invalid card status '{0}'. Valid statuses: todo, in-progress, done")]
    InvalidStatus(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
