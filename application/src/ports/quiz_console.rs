//! Quiz console port
//!
//! The game loop talks to the player only through [`QuizConsole`]. The
//! terminal adapter lives in the presentation layer; tests use scripted
//! implementations.

use std::io;
use trivia_domain::{GameSummary, QuestionOutcome};

/// Interactive surface the game loop presents questions on.
pub trait QuizConsole {
    /// Called once before the first question.
    fn begin(&mut self, total: usize) -> io::Result<()>;

    /// Show question `number` (1-based).
    fn present_question(&mut self, number: usize, question: &str) -> io::Result<()>;

    /// Prompt for and read one guess. `Ok(None)` means the input was closed.
    fn read_guess(&mut self) -> io::Result<Option<String>>;

    /// Tell the player an empty guess is not accepted.
    fn reject_empty_guess(&mut self) -> io::Result<()>;

    /// Report whether the guess was correct.
    fn report_outcome(&mut self, outcome: &QuestionOutcome) -> io::Result<()>;

    /// Report the final score.
    fn report_summary(&mut self, summary: &GameSummary) -> io::Result<()>;
}
