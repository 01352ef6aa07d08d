//! LLM Gateway port
//!
//! Defines the interface for requesting completions from an LLM provider.

use async_trait::async_trait;
use trivia_domain::Model;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("No response from model")]
    EmptyResponse,

    #[error("Timeout")]
    Timeout,
}

/// Gateway for LLM communication
///
/// This port defines how the application layer asks an LLM provider for a
/// completion. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send a single user prompt and return the text of the first choice.
    async fn complete(&self, model: &Model, prompt: &str) -> Result<String, GatewayError>;
}
