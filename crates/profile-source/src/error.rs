//! Error types for profile-source

use thiserror::Error;

/// Errors raised while constructing a profile source
#[derive(Error, Debug)]
pub enum SourceError {
    /// Fixture file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Fixture file is not valid JSON
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Required setting missing or malformed
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// HTTP client could not be built
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Http(err.to_string())
    }
}
