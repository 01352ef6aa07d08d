//! Prompt template for trivia generation

use crate::core::error::DomainError;
use crate::trivia::topic::TriviaTopic;

/// Largest number of questions requested in one completion.
pub const MAX_QUESTION_COUNT: usize = 50;

/// Default number of questions per game.
pub const DEFAULT_QUESTION_COUNT: usize = 20;

/// Templates for generating prompts
pub struct TriviaPromptTemplate;

impl TriviaPromptTemplate {
    /// User prompt asking for `count` question/answer pairs about `topic`
    /// as a single JSON object.
    pub fn generation_prompt(topic: &TriviaTopic, count: usize) -> String {
        format!(
            r#"Generate a series of {count} trivia questions about {topic}.
Please respond only in the following valid JSON format, with no extra formatting or text in your response:
{{
    "questions": ["Question 1", "Question 2", ...],
    "answers": ["Answer 1", "Answer 2", ...]
}}
Do not include any questions where the answer would include special symbols or characters."#
        )
    }

    /// Validate a requested question count.
    pub fn validate_count(count: usize) -> Result<usize, DomainError> {
        if (1..=MAX_QUESTION_COUNT).contains(&count) {
            Ok(count)
        } else {
            Err(DomainError::InvalidQuestionCount {
                requested: count,
                max: MAX_QUESTION_COUNT,
            })
        }
    }
}
