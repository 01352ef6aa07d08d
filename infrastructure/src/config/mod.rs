//! Configuration loading for llm-trivia
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `LLM_TRIVIA_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./trivia.toml` or `./.trivia.toml`
//! 4. Global config: `$XDG_CONFIG_HOME/llm-trivia/config.toml`
//! 5. Default values
//!
//! API key resolution lives in [`credentials`].

pub mod credentials;
mod file_config;
mod loader;

pub use credentials::{
    ApiKey, CredentialError, load_dotenv, resolve_api_key, resolve_api_key_with,
};
pub use file_config::{
    ConfigValidationError, FileConfig, FileGameConfig, FileOpenAiConfig, FileOutputConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
