//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod game;
mod output;
mod providers;

pub use game::FileGameConfig;
pub use output::FileOutputConfig;
pub use providers::FileOpenAiConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use trivia_domain::MAX_QUESTION_COUNT;

/// Configuration validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("game.question_count must be between 1 and {max}, got {value}")]
    InvalidQuestionCount { value: usize, max: usize },

    #[error("openai.model cannot be empty")]
    EmptyModelName,

    #[error("openai.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("openai.timeout_secs cannot be 0")]
    InvalidTimeout,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// OpenAI (or compatible) provider settings
    pub openai: FileOpenAiConfig,
    /// Game settings
    pub game: FileGameConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let count = self.game.question_count;
        if count == 0 || count > MAX_QUESTION_COUNT {
            return Err(ConfigValidationError::InvalidQuestionCount {
                value: count,
                max: MAX_QUESTION_COUNT,
            });
        }

        if self.openai.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if self.openai.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }

        if self.openai.timeout_secs == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        Ok(())
    }
}
