//! Line-oriented terminal quiz
//!
//! Implements the [`QuizConsole`] port over any `BufRead`/`Write` pair.
//! The binary uses stdin/stdout; tests use in-memory buffers.

use crate::output::console::{ConsoleFormatter, GUESS_PROMPT, TOPIC_PROMPT};
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use trivia_application::ports::quiz_console::QuizConsole;
use trivia_domain::{GameSummary, QuestionOutcome};

/// Terminal implementation of [`QuizConsole`].
pub struct TerminalQuiz<R, W> {
    input: R,
    output: W,
    formatter: ConsoleFormatter,
}

impl TerminalQuiz<StdinLock<'static>, Stdout> {
    /// Quiz over the process's stdin and stdout.
    pub fn stdio(colorize: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout()).with_color(colorize)
    }
}

impl<R: BufRead, W: Write> TerminalQuiz<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            formatter: ConsoleFormatter::plain(),
        }
    }

    pub fn with_color(mut self, colorize: bool) -> Self {
        self.formatter = ConsoleFormatter::new(colorize);
        self
    }

    /// Ask for the trivia topic. `Ok(None)` when input is already closed.
    pub fn ask_topic(&mut self) -> io::Result<Option<String>> {
        self.prompt(TOPIC_PROMPT)?;
        self.read_line()
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> QuizConsole for TerminalQuiz<R, W> {
    fn begin(&mut self, _total: usize) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.formatter.header())
    }

    fn present_question(&mut self, number: usize, question: &str) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.formatter.question(number, question))
    }

    fn read_guess(&mut self) -> io::Result<Option<String>> {
        self.prompt(GUESS_PROMPT)?;
        self.read_line()
    }

    fn reject_empty_guess(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", self.formatter.empty_guess_notice())
    }

    fn report_outcome(&mut self, outcome: &QuestionOutcome) -> io::Result<()> {
        writeln!(self.output, "{}", self.formatter.outcome(outcome))
    }

    fn report_summary(&mut self, summary: &GameSummary) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.formatter.summary(summary))?;
        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use trivia_application::PlayTriviaUseCase;
    use trivia_application::PlayTriviaError;
    use trivia_domain::TriviaSet;

    fn quiz(input: &str) -> TerminalQuiz<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalQuiz::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(quiz: TerminalQuiz<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(quiz.into_inner().1).unwrap()
    }

    #[test]
    fn test_ask_topic() {
        let mut q = quiz("Ancient Rome\r\n");
        assert_eq!(q.ask_topic().unwrap().as_deref(), Some("Ancient Rome"));
        assert_eq!(output_of(q), TOPIC_PROMPT);
    }

    #[test]
    fn test_ask_topic_blank_and_closed() {
        let mut q = quiz("\n");
        assert_eq!(q.ask_topic().unwrap().as_deref(), Some(""));
        assert_eq!(q.ask_topic().unwrap(), None);
    }

    #[test]
    fn test_read_guess_keeps_inner_whitespace() {
        let mut q = quiz("  george washington \n");
        assert_eq!(
            q.read_guess().unwrap().as_deref(),
            Some("  george washington ")
        );
        assert_eq!(q.read_guess().unwrap(), None);
        assert_eq!(output_of(q), format!("{GUESS_PROMPT}{GUESS_PROMPT}"));
    }

    #[test]
    fn test_full_game_transcript() {
        let trivia = TriviaSet::new(
            vec![
                "What is the capital of France?".to_string(),
                "In what year did World War II end?".to_string(),
            ],
            vec!["Paris".to_string(), "1945".to_string()],
        )
        .unwrap();

        let mut q = quiz("pariis\n\n194\n");
        let summary = PlayTriviaUseCase::new().execute(&trivia, &mut q).unwrap();
        assert_eq!(summary.score, 1);

        let expected = "\n\
Trivia Questions:\n\
\n\
Question 1: What is the capital of France?\n\
Enter your guess: Correct!\n\
\n\
Question 2: In what year did World War II end?\n\
Enter your guess: Please enter a guess.\n\
Enter your guess: Incorrect. The answer was 1945\n\
\n\
Your final score:  1  out of  2\n";
        assert_eq!(output_of(q), expected);
    }

    #[test]
    fn test_input_closed_mid_game() {
        let trivia = TriviaSet::new(
            vec!["Q1".to_string(), "Q2".to_string()],
            vec!["a".to_string(), "b".to_string()],
        )
        .unwrap();

        let mut q = quiz("a\n");
        let err = PlayTriviaUseCase::new()
            .execute(&trivia, &mut q)
            .unwrap_err();
        assert!(matches!(err, PlayTriviaError::InputClosed { question: 2 }));
    }
}
