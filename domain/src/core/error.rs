//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed trivia set: {questions} questions and {answers} answers")]
    MalformedTriviaSet { questions: usize, answers: usize },

    #[error("Invalid trivia response: {0}")]
    InvalidTriviaResponse(String),

    #[error("Question count must be between 1 and {max}, got {requested}")]
    InvalidQuestionCount { requested: usize, max: usize },
}

impl DomainError {
    /// Check if this error describes an unusable question/answer pairing
    pub fn is_malformed(&self) -> bool {
        matches!(self, DomainError::MalformedTriviaSet { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_error_display() {
        let error = DomainError::MalformedTriviaSet {
            questions: 3,
            answers: 2,
        };
        assert_eq!(
            error.to_string(),
            "Malformed trivia set: 3 questions and 2 answers"
        );
    }

    #[test]
    fn test_is_malformed_check() {
        assert!(
            DomainError::MalformedTriviaSet {
                questions: 0,
                answers: 0
            }
            .is_malformed()
        );
        assert!(!DomainError::InvalidTriviaResponse("x".to_string()).is_malformed());
    }
}
