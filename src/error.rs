//! Error types for avatar loading and feed parsing.

use thiserror::Error;

/// Why a single avatar load attempt failed. Both kinds are terminal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Transport or HTTP-level failure
    #[error("network error: {0}")]
    Network(String),

    /// Bytes arrived but are not a supported image
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for LoadError {
    fn from(e: reqwest::Error) -> Self {
        LoadError::Network(e.to_string())
    }
}

impl From<image::ImageError> for LoadError {
    fn from(e: image::ImageError) -> Self {
        LoadError::Decode(e.to_string())
    }
}

/// Failure reading a message feed from disk
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read feed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse feed: {0}")]
    Parse(#[from] serde_json::Error),
}
