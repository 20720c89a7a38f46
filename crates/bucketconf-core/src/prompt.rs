//! Single-choice prompt primitive.
//!
//! A [`Prompter`] is asked a round of one or more [`Question`]s and answers
//! with one choice index per question. [`TerminalPrompter`] implements it over
//! any line-oriented reader/writer pair, rendering numbered lists:
//!
//! ```text
//! ? Select an AWS region:
//!   1) us-east-1 (2 Buckets)
//!   2) eu-west-1 (0 Buckets)
//! > 1
//! ```

use std::io::{BufRead, Write};

use crate::error::PromptError;

/// One single-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Text shown above the choices.
    pub message: String,
    /// Choice labels, in display order.
    pub choices: Vec<String>,
}

impl Question {
    /// Create a question from a message and its choice labels.
    #[must_use]
    pub fn new(message: impl Into<String>, choices: Vec<String>) -> Self {
        Self {
            message: message.into(),
            choices,
        }
    }
}

/// Blocking request/response interface to the operator.
pub trait Prompter {
    /// Ask every question of one round, returning one index per question.
    fn ask(&mut self, questions: &[Question]) -> Result<Vec<usize>, PromptError>;

    /// Show an informational message.
    fn notify(&mut self, message: &str) -> Result<(), PromptError>;
}

/// Prompter reading numbered answers from a line-oriented input.
#[derive(Debug)]
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<std::io::StdinLock<'static>, std::io::Stderr> {
    /// Prompter on the process terminal.
    ///
    /// Prompts go to stderr so stdout carries only the final confirmation.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    /// Create a prompter over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompter, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask_one(&mut self, question: &Question) -> Result<usize, PromptError> {
        writeln!(self.output, "? {}", question.message)?;
        for (i, choice) in question.choices.iter().enumerate() {
            writeln!(self.output, "  {}) {choice}", i + 1)?;
        }

        let len = question.choices.len();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Err(PromptError::Interrupted);
            }

            // Undecodable bytes count as an invalid answer.
            match std::str::from_utf8(&line)
                .ok()
                .and_then(|l| parse_choice(l, len))
            {
                Some(index) => return Ok(index),
                None => writeln!(self.output, "Please enter a number between 1 and {len}.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn ask(&mut self, questions: &[Question]) -> Result<Vec<usize>, PromptError> {
        questions.iter().map(|q| self.ask_one(q)).collect()
    }

    fn notify(&mut self, message: &str) -> Result<(), PromptError> {
        writeln!(self.output, "! {message}")?;
        Ok(())
    }
}

/// Parse a 1-based answer into a 0-based index below `len`.
fn parse_choice(line: &str, len: usize) -> Option<usize> {
    line.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
}
