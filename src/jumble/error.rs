use thiserror::Error;

#[derive(Error, Debug)]
pub enum JumbleError {
    /// The word source is missing, unreadable or empty.
    #[error("Input error: {0}")]
    Input(String),

    /// Build and edit modes were both requested, or neither was.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, JumbleError>;
