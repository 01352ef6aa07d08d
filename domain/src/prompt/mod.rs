//! Prompt templates sent to the completion API.

pub mod template;

pub use template::{DEFAULT_QUESTION_COUNT, MAX_QUESTION_COUNT, TriviaPromptTemplate};
