//! OpenAI-compatible completion adapter
//!
//! Implements the [`LlmGateway`](trivia_application::ports::llm_gateway::LlmGateway)
//! port over the Chat Completions HTTP API.

pub mod error;
pub mod gateway;
pub mod types;

pub use error::OpenAiError;
pub use gateway::{OpenAiGateway, OpenAiSettings};
