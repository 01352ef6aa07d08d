//! Deciding whether a free-text guess matches a canonical answer.
//!
//! Rules are applied in order and the first one that decides wins:
//!
//! 1. Both sides are normalized (trimmed, lower-cased).
//! 2. An all-digit answer (a count, a year) only accepts an exact guess.
//! 3. A guess contained in the answer is accepted ("Nile" for "The Nile").
//! 4. Otherwise the guess is accepted when its Jaro-Winkler similarity to the
//!    answer is strictly above the fuzzy threshold.

use super::jaro_winkler::JaroWinkler;
use serde::Serialize;

/// Similarity a guess must strictly exceed to pass the fuzzy rule.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.85;

/// Outcome of comparing one guess with one canonical answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum MatchDecision {
    /// Numeric answer matched exactly
    NumericExact,
    /// Numeric answer, guess differs in any way
    NumericMismatch,
    /// Guess is contained in the answer
    Substring,
    /// Similar enough to the answer
    FuzzyAccepted { similarity: f64 },
    /// Not similar enough to the answer
    FuzzyRejected { similarity: f64 },
}

impl MatchDecision {
    pub fn is_correct(&self) -> bool {
        matches!(
            self,
            MatchDecision::NumericExact
                | MatchDecision::Substring
                | MatchDecision::FuzzyAccepted { .. }
        )
    }
}

/// Answer matcher with configurable fuzzy parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnswerMatcher {
    metric: JaroWinkler,
    threshold: f64,
}

impl AnswerMatcher {
    pub fn new() -> Self {
        Self {
            metric: JaroWinkler::default(),
            threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }

    /// Use a different fuzzy threshold (still exclusive)
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_metric(mut self, metric: JaroWinkler) -> Self {
        self.metric = metric;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Compare `guess` against `canonical_answer`.
    pub fn evaluate(&self, guess: &str, canonical_answer: &str) -> MatchDecision {
        let guess = normalize(guess);
        let answer = normalize(canonical_answer);

        if is_numeric_answer(&answer) {
            return if guess == answer {
                MatchDecision::NumericExact
            } else {
                MatchDecision::NumericMismatch
            };
        }

        if answer.contains(guess.as_str()) {
            return MatchDecision::Substring;
        }

        let similarity = self.metric.similarity(&guess, &answer);
        if similarity > self.threshold {
            MatchDecision::FuzzyAccepted { similarity }
        } else {
            MatchDecision::FuzzyRejected { similarity }
        }
    }

    pub fn is_correct(&self, guess: &str, canonical_answer: &str) -> bool {
        self.evaluate(guess, canonical_answer).is_correct()
    }
}

impl Default for AnswerMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Trim surrounding whitespace and lower-case.
///
/// Each character is folded on its own, so the result never depends on
/// its neighbours (a trailing capital sigma becomes `σ`, not `ς`).
pub fn normalize(s: &str) -> String {
    s.trim().chars().flat_map(char::to_lowercase).collect()
}

/// One or more ASCII digits and nothing else (no sign, no decimal point).
pub fn is_numeric_answer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Decide a single guess with the default matcher.
pub fn is_correct(guess: &str, canonical_answer: &str) -> bool {
    AnswerMatcher::new().is_correct(guess, canonical_answer)
}
