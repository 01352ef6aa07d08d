//! Console text for the trivia game

use colored::Colorize;
use trivia_domain::{GameSummary, QuestionOutcome};

/// Prompt shown before reading the topic.
pub const TOPIC_PROMPT: &str =
    "Enter a topic for your trivia questions, or leave blank for random topics: ";

/// Prompt shown before reading each guess.
pub const GUESS_PROMPT: &str = "Enter your guess: ";

/// Formats game output for console display.
///
/// With `colorize` off every line is plain text, byte for byte.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleFormatter {
    colorize: bool,
}

impl ConsoleFormatter {
    pub fn new(colorize: bool) -> Self {
        Self { colorize }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn header(&self) -> String {
        let text = "Trivia Questions:";
        if self.colorize {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn question(&self, number: usize, question: &str) -> String {
        if self.colorize {
            format!("{} {}", format!("Question {}:", number).bold(), question)
        } else {
            format!("Question {}: {}", number, question)
        }
    }

    pub fn empty_guess_notice(&self) -> String {
        let text = "Please enter a guess.";
        if self.colorize {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn outcome(&self, outcome: &QuestionOutcome) -> String {
        match (outcome.is_correct(), self.colorize) {
            (true, true) => "Correct!".green().bold().to_string(),
            (true, false) => "Correct!".to_string(),
            (false, true) => format!(
                "{} {}",
                "Incorrect.".red().bold(),
                format!("The answer was {}", outcome.answer).red()
            ),
            (false, false) => format!("Incorrect. The answer was {}", outcome.answer),
        }
    }

    /// The spacing around the numbers is part of the expected output.
    pub fn summary(&self, summary: &GameSummary) -> String {
        let line = format!(
            "Your final score:  {}  out of  {}",
            summary.score, summary.total
        );
        if self.colorize { line.bold().to_string() } else { line }
    }

    pub fn error(&self, message: &str) -> String {
        if self.colorize {
            format!("{} {}", "Error:".red().bold(), message)
        } else {
            format!("Error: {}", message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_domain::MatchDecision;

    fn outcome(correct: bool) -> QuestionOutcome {
        QuestionOutcome {
            number: 1,
            question: "Capital of France?".to_string(),
            guess: if correct { "paris" } else { "lyon" }.to_string(),
            answer: "Paris".to_string(),
            decision: if correct {
                MatchDecision::Substring
            } else {
                MatchDecision::FuzzyRejected { similarity: 0.5 }
            },
        }
    }

    #[test]
    fn test_plain_lines() {
        let f = ConsoleFormatter::plain();
        assert_eq!(f.header(), "Trivia Questions:");
        assert_eq!(f.question(3, "Who wrote Hamlet?"), "Question 3: Who wrote Hamlet?");
        assert_eq!(f.outcome(&outcome(true)), "Correct!");
        assert_eq!(
            f.outcome(&outcome(false)),
            "Incorrect. The answer was Paris"
        );
        assert_eq!(f.error("boom"), "Error: boom");
    }

    #[test]
    fn test_summary_spacing() {
        let f = ConsoleFormatter::plain();
        let summary = GameSummary { score: 3, total: 5 };
        assert_eq!(f.summary(&summary), "Your final score:  3  out of  5");
    }

    #[test]
    fn test_colored_lines_keep_text() {
        let f = ConsoleFormatter::new(true);
        assert!(f.outcome(&outcome(true)).contains("Correct!"));
        assert!(f.outcome(&outcome(false)).contains("The answer was Paris"));
        assert!(f.question(2, "Q?").contains("Q?"));
    }

    #[test]
    fn test_error_line_follows_color_setting() {
        let message = "Failed to load configuration: config file not found: x.toml";
        assert_eq!(
            ConsoleFormatter::new(false).error(message),
            format!("Error: {message}")
        );
        let colored = ConsoleFormatter::new(true).error(message);
        assert!(colored.contains("Error:"));
        assert!(colored.ends_with(message));
    }
}
