//! Infrastructure layer for llm-trivia
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod openai;

// Re-export commonly used types
pub use config::{
    ApiKey, ConfigLoader, ConfigValidationError, CredentialError, FileConfig, FileGameConfig,
    FileOpenAiConfig, FileOutputConfig, load_dotenv, resolve_api_key,
};
pub use openai::{OpenAiError, OpenAiGateway, OpenAiSettings};
