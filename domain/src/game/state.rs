//! Score keeping for one game session

use crate::matching::matcher::MatchDecision;
use serde::Serialize;

/// The result of one answered question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionOutcome {
    /// 1-based question number
    pub number: usize,
    pub question: String,
    pub guess: String,
    pub answer: String,
    pub decision: MatchDecision,
}

impl QuestionOutcome {
    pub fn is_correct(&self) -> bool {
        self.decision.is_correct()
    }
}

/// Running score of a game session.
///
/// Invariant: `0 <= score <= answered <= total`; each question is recorded
/// at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    score: usize,
    answered: usize,
    total: usize,
}

impl GameState {
    pub fn new(total: usize) -> Self {
        Self {
            score: 0,
            answered: 0,
            total,
        }
    }

    /// Record the next question's outcome. Returns `false` (and changes
    /// nothing) once every question has been recorded.
    pub fn record(&mut self, correct: bool) -> bool {
        if self.is_finished() {
            return false;
        }
        self.answered += 1;
        if correct {
            self.score += 1;
        }
        true
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_finished(&self) -> bool {
        self.answered >= self.total
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            score: self.score,
            total: self.total,
        }
    }
}

/// Final tally reported when the game ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub score: usize,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_at_zero() {
        let state = GameState::new(3);
        assert_eq!(state.score(), 0);
        assert_eq!(state.total(), 3);
        assert!(!state.is_finished());
    }

    #[test]
    fn test_record_counts_only_correct_answers() {
        let mut state = GameState::new(3);
        assert!(state.record(true));
        assert!(state.record(false));
        assert!(state.record(true));
        assert!(state.is_finished());
        assert_eq!(state.summary(), GameSummary { score: 2, total: 3 });
    }

    #[test]
    fn test_score_never_exceeds_total() {
        let mut state = GameState::new(1);
        assert!(state.record(true));
        assert!(!state.record(true));
        assert_eq!(state.score(), 1);
        assert!(state.is_finished());
    }

    #[test]
    fn test_outcome_correctness_follows_decision() {
        let outcome = QuestionOutcome {
            number: 1,
            question: "Capital of France?".to_string(),
            guess: "paris".to_string(),
            answer: "Paris".to_string(),
            decision: MatchDecision::Substring,
        };
        assert!(outcome.is_correct());
    }
}
