//! Generation parameters — what to ask the completion API for.

use trivia_domain::{DEFAULT_QUESTION_COUNT, Model};

/// Parameters for one trivia generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationParams {
    /// Completion model to ask.
    pub model: Model,
    /// Number of question/answer pairs to request.
    pub question_count: usize,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            question_count: DEFAULT_QUESTION_COUNT,
        }
    }
}

impl GenerationParams {
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_question_count(mut self, count: usize) -> Self {
        self.question_count = count;
        self
    }
}
