//! Trivia set entity

use crate::core::error::DomainError;
use serde::Serialize;

/// Ordered questions with index-aligned canonical answers.
///
/// `answers()[i]` is the answer to `questions()[i]`. Both sequences are
/// non-empty and of equal length; once constructed the set cannot change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriviaSet {
    questions: Vec<String>,
    answers: Vec<String>,
}

/// One question and its canonical answer, borrowed from a [`TriviaSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriviaItem<'a> {
    /// 1-based position in the set
    pub number: usize,
    pub question: &'a str,
    pub answer: &'a str,
}

impl TriviaSet {
    /// Build a set, rejecting empty or misaligned sequences.
    pub fn new(questions: Vec<String>, answers: Vec<String>) -> Result<Self, DomainError> {
        if questions.is_empty() || questions.len() != answers.len() {
            return Err(DomainError::MalformedTriviaSet {
                questions: questions.len(),
                answers: answers.len(),
            });
        }
        Ok(Self { questions, answers })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed set; provided for API completeness.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Iterate over the items in order.
    pub fn items(&self) -> impl Iterator<Item = TriviaItem<'_>> {
        self.questions
            .iter()
            .zip(&self.answers)
            .enumerate()
            .map(|(index, (question, answer))| TriviaItem {
                number: index + 1,
                question,
                answer,
            })
    }
}
