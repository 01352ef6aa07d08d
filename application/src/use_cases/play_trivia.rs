//! Play Trivia use case.
//!
//! Runs one game over a [`TriviaSet`]:
//!
//! ```text
//! Presenting(i) → read guess (re-prompt while empty)
//!      ↓
//! Evaluating(i) → AnswerMatcher
//!      ↓
//! Scored(i)     → report outcome, bump score on correct
//!      ↓
//! Presenting(i+1) … Finished → report summary
//! ```
//!
//! An empty guess would pass the substring rule against any answer, so it
//! is never evaluated; the player is asked again instead.

use crate::ports::quiz_console::QuizConsole;
use std::io;
use thiserror::Error;
use tracing::{debug, info};
use trivia_domain::{AnswerMatcher, GameState, GameSummary, QuestionOutcome, TriviaSet};
use trivia_domain::core::string::truncate;

/// Errors that can occur while playing.
#[derive(Error, Debug)]
pub enum PlayTriviaError {
    #[error("Console error: {0}")]
    Console(#[from] io::Error),

    #[error("Input closed before question {question} was answered")]
    InputClosed { question: usize },
}

/// Use case for playing one game session.
#[derive(Debug, Clone, Default)]
pub struct PlayTriviaUseCase {
    matcher: AnswerMatcher,
}

impl PlayTriviaUseCase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_matcher(mut self, matcher: AnswerMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Ask every question once, in order, and return the final tally.
    pub fn execute(
        &self,
        trivia: &TriviaSet,
        console: &mut dyn QuizConsole,
    ) -> Result<GameSummary, PlayTriviaError> {
        let mut state = GameState::new(trivia.len());
        console.begin(trivia.len())?;

        for item in trivia.items() {
            console.present_question(item.number, item.question)?;
            let guess = Self::read_non_empty_guess(console, item.number)?;

            let decision = self.matcher.evaluate(&guess, item.answer);
            debug!(
                "Question {} ('{}'): {:?}",
                item.number,
                truncate(item.question, 60),
                decision
            );

            let outcome = QuestionOutcome {
                number: item.number,
                question: item.question.to_string(),
                guess,
                answer: item.answer.to_string(),
                decision,
            };
            state.record(outcome.is_correct());
            console.report_outcome(&outcome)?;
        }

        let summary = state.summary();
        info!("Game finished: {} out of {}", summary.score, summary.total);
        console.report_summary(&summary)?;
        Ok(summary)
    }

    fn read_non_empty_guess(
        console: &mut dyn QuizConsole,
        question: usize,
    ) -> Result<String, PlayTriviaError> {
        loop {
            match console.read_guess()? {
                None => return Err(PlayTriviaError::InputClosed { question }),
                Some(guess) if guess.trim().is_empty() => console.reject_empty_guess()?,
                Some(guess) => return Ok(guess),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use trivia_domain::MatchDecision;

    // ==================== Test Mocks ====================

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Begin(usize),
        Question(usize, String),
        EmptyRejected,
        Outcome(usize, bool),
        Summary(GameSummary),
    }

    #[derive(Default)]
    struct ScriptedConsole {
        guesses: VecDeque<String>,
        events: Vec<Event>,
        reads: usize,
    }

    impl ScriptedConsole {
        fn new(guesses: &[&str]) -> Self {
            Self {
                guesses: guesses.iter().map(|g| g.to_string()).collect(),
                ..Default::default()
            }
        }

        fn outcomes(&self) -> Vec<(usize, bool)> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    Event::Outcome(n, correct) => Some((*n, *correct)),
                    _ => None,
                })
                .collect()
        }
    }

    impl QuizConsole for ScriptedConsole {
        fn begin(&mut self, total: usize) -> io::Result<()> {
            self.events.push(Event::Begin(total));
            Ok(())
        }

        fn present_question(&mut self, number: usize, question: &str) -> io::Result<()> {
            self.events.push(Event::Question(number, question.to_string()));
            Ok(())
        }

        fn read_guess(&mut self) -> io::Result<Option<String>> {
            self.reads += 1;
            Ok(self.guesses.pop_front())
        }

        fn reject_empty_guess(&mut self) -> io::Result<()> {
            self.events.push(Event::EmptyRejected);
            Ok(())
        }

        fn report_outcome(&mut self, outcome: &QuestionOutcome) -> io::Result<()> {
            self.events
                .push(Event::Outcome(outcome.number, outcome.is_correct()));
            Ok(())
        }

        fn report_summary(&mut self, summary: &GameSummary) -> io::Result<()> {
            self.events.push(Event::Summary(*summary));
            Ok(())
        }
    }

    fn trivia(pairs: &[(&str, &str)]) -> TriviaSet {
        TriviaSet::new(
            pairs.iter().map(|(q, _)| q.to_string()).collect(),
            pairs.iter().map(|(_, a)| a.to_string()).collect(),
        )
        .unwrap()
    }

    // ==================== Tests ====================

    #[test]
    fn test_single_correct_answer() {
        let set = trivia(&[("Capital of France?", "Paris")]);
        let mut console = ScriptedConsole::new(&["paris"]);

        let summary = PlayTriviaUseCase::new().execute(&set, &mut console).unwrap();

        assert_eq!(summary, GameSummary { score: 1, total: 1 });
        assert_eq!(
            console.events,
            vec![
                Event::Begin(1),
                Event::Question(1, "Capital of France?".to_string()),
                Event::Outcome(1, true),
                Event::Summary(GameSummary { score: 1, total: 1 }),
            ]
        );
    }

    #[test]
    fn test_typo_is_scored_correct() {
        let set = trivia(&[("Capital of France?", "Paris")]);
        let mut console = ScriptedConsole::new(&["pariis"]);

        let summary = PlayTriviaUseCase::new().execute(&set, &mut console).unwrap();

        assert_eq!(summary.score, 1);
    }

    #[test]
    fn test_mixed_answers_and_numeric_rule() {
        let set = trivia(&[
            ("Capital of France?", "Paris"),
            ("Year WWII ended?", "1945"),
            ("Longest river?", "The Nile"),
            ("How many legs does a spider have?", "8"),
        ]);
        let mut console = ScriptedConsole::new(&["Madrid", "1945 ", "nile", "80"]);

        let summary = PlayTriviaUseCase::new().execute(&set, &mut console).unwrap();

        assert_eq!(summary, GameSummary { score: 2, total: 4 });
        assert_eq!(
            console.outcomes(),
            vec![(1, false), (2, true), (3, true), (4, false)]
        );
    }

    #[test]
    fn test_empty_guess_is_reprompted() {
        let set = trivia(&[("Longest river?", "The Nile")]);
        let mut console = ScriptedConsole::new(&["", "   ", "Amazon"]);

        let summary = PlayTriviaUseCase::new().execute(&set, &mut console).unwrap();

        // Amazon is evaluated, not the empty lines
        assert_eq!(summary.score, 0);
        assert_eq!(console.reads, 3);
        assert_eq!(
            console
                .events
                .iter()
                .filter(|e| **e == Event::EmptyRejected)
                .count(),
            2
        );
    }

    #[test]
    fn test_exactly_one_guess_per_question() {
        let set = trivia(&[("Q1", "alpha"), ("Q2", "beta"), ("Q3", "gamma")]);
        let mut console = ScriptedConsole::new(&["wrong", "beta", "wrong", "extra"]);

        let summary = PlayTriviaUseCase::new().execute(&set, &mut console).unwrap();

        assert_eq!(summary, GameSummary { score: 1, total: 3 });
        assert_eq!(console.reads, 3);
        assert_eq!(console.guesses.len(), 1);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let set = trivia(&[("Q1", "alpha"), ("Q2", "beta")]);
        let mut console = ScriptedConsole::new(&["alpha"]);

        let err = PlayTriviaUseCase::new()
            .execute(&set, &mut console)
            .unwrap_err();

        assert!(matches!(err, PlayTriviaError::InputClosed { question: 2 }));
        assert!(
            !console
                .events
                .iter()
                .any(|e| matches!(e, Event::Summary(_)))
        );
    }

    #[test]
    fn test_custom_matcher_threshold() {
        let set = trivia(&[("Texas city?", "Houston")]);
        let strict = AnswerMatcher::new().with_threshold(0.9);

        let mut console = ScriptedConsole::new(&["hudson"]);
        let summary = PlayTriviaUseCase::new()
            .with_matcher(strict)
            .execute(&set, &mut console)
            .unwrap();
        assert_eq!(summary.score, 0);

        let mut console = ScriptedConsole::new(&["hudson"]);
        let summary = PlayTriviaUseCase::new().execute(&set, &mut console).unwrap();
        assert_eq!(summary.score, 1);
    }

    #[test]
    fn test_outcome_carries_decision() {
        struct Capture(Vec<QuestionOutcome>, VecDeque<String>);

        impl QuizConsole for Capture {
            fn begin(&mut self, _total: usize) -> io::Result<()> {
                Ok(())
            }
            fn present_question(&mut self, _number: usize, _question: &str) -> io::Result<()> {
                Ok(())
            }
            fn read_guess(&mut self) -> io::Result<Option<String>> {
                Ok(self.1.pop_front())
            }
            fn reject_empty_guess(&mut self) -> io::Result<()> {
                Ok(())
            }
            fn report_outcome(&mut self, outcome: &QuestionOutcome) -> io::Result<()> {
                self.0.push(outcome.clone());
                Ok(())
            }
            fn report_summary(&mut self, _summary: &GameSummary) -> io::Result<()> {
                Ok(())
            }
        }

        let set = trivia(&[("Year?", "1945")]);
        let mut console = Capture(Vec::new(), VecDeque::from(vec!["194".to_string()]));
        PlayTriviaUseCase::new().execute(&set, &mut console).unwrap();

        assert_eq!(console.0[0].decision, MatchDecision::NumericMismatch);
        assert_eq!(console.0[0].answer, "1945");
        assert_eq!(console.0[0].guess, "194");
    }
}
