//! Error types for the OpenAI adapter

use thiserror::Error;

/// Result type alias for OpenAI adapter setup
pub type Result<T> = std::result::Result<T, OpenAiError>;

/// Errors that can occur while setting up the OpenAI adapter
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),

    #[error("Invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}
