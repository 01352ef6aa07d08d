//! Game configuration from TOML (`[game]` section)

use serde::{Deserialize, Serialize};
use trivia_domain::{DEFAULT_QUESTION_COUNT, DEFAULT_TOPIC};

/// Raw game configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// Questions requested per game
    pub question_count: usize,
    /// Topic used when the topic prompt is left blank
    pub default_topic: String,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        Self {
            question_count: DEFAULT_QUESTION_COUNT,
            default_topic: DEFAULT_TOPIC.to_string(),
        }
    }
}
