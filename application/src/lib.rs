//! Application layer for llm-trivia
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationParams;
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway},
    progress::{ActiveProgress, NoProgress, ProgressIndicator},
    quiz_console::QuizConsole,
};
pub use use_cases::generate_trivia::{
    GENERATING_MESSAGE, GenerateTriviaError, GenerateTriviaInput, GenerateTriviaUseCase,
};
pub use use_cases::play_trivia::{PlayTriviaError, PlayTriviaUseCase};
