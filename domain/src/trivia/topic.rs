//! Trivia topic value object

use serde::{Deserialize, Serialize};

/// Topic used when the user leaves the topic prompt blank.
pub const DEFAULT_TOPIC: &str = "random topics";

/// The subject the generated questions should cover (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriviaTopic(String);

impl TriviaTopic {
    /// Build a topic from user input, falling back to `default` when blank.
    pub fn from_input(input: &str, default: &str) -> Self {
        let input = input.trim();
        if input.is_empty() {
            Self(default.trim().to_string())
        } else {
            Self(input.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TriviaTopic {
    fn default() -> Self {
        Self(DEFAULT_TOPIC.to_string())
    }
}

impl std::fmt::Display for TriviaTopic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_from_input() {
        let topic = TriviaTopic::from_input("  Roman history ", DEFAULT_TOPIC);
        assert_eq!(topic.as_str(), "Roman history");
    }

    #[test]
    fn test_blank_input_uses_default() {
        assert_eq!(TriviaTopic::from_input("   ", DEFAULT_TOPIC), TriviaTopic::default());
        assert_eq!(TriviaTopic::from_input("", "space").as_str(), "space");
    }
}
