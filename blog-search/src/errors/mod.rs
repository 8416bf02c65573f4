//! Error types for the blog search client.

use blog_search_repository::SearchIndexError;
use thiserror::Error;

/// Errors that can occur during client initialization or command execution.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error from the search index.
    #[error("Search index error: {0}")]
    Search(#[from] SearchIndexError),

    /// Failed to write command output.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
