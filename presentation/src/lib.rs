//! Presentation layer for llm-trivia
//!
//! This crate contains CLI definitions, console text, the terminal quiz
//! and the progress spinner.

pub mod cli;
pub mod output;
pub mod progress;
pub mod quiz;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::spinner::{SpinnerHandle, SpinnerProgress};
pub use quiz::terminal::TerminalQuiz;
