//! Domain layer for llm-trivia
//!
//! This crate contains the core game logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **TriviaSet**: ordered questions with index-aligned canonical answers
//! - **AnswerMatcher**: decides whether a free-text guess counts as correct
//!   (numeric exact match, substring, then Jaro-Winkler similarity)
//! - **GameState**: running score of one session

pub mod core;
pub mod game;
pub mod matching;
pub mod prompt;
pub mod trivia;

// Re-export commonly used types
pub use core::{error::DomainError, model::Model};
pub use game::state::{GameState, GameSummary, QuestionOutcome};
pub use matching::{
    jaro_winkler::{JaroWinkler, jaro},
    matcher::{
        AnswerMatcher, DEFAULT_FUZZY_THRESHOLD, MatchDecision, is_correct, is_numeric_answer,
        normalize,
    },
};
pub use prompt::{DEFAULT_QUESTION_COUNT, MAX_QUESTION_COUNT, TriviaPromptTemplate};
pub use trivia::{
    parsing::{parse_trivia_json, parse_trivia_response},
    set::{TriviaItem, TriviaSet},
    topic::{DEFAULT_TOPIC, TriviaTopic},
};
