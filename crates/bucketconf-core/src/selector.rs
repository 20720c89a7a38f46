//! Interactive region, bucket and format selection.
//!
//! The selection is an explicit state machine:
//!
//! ```text
//! AwaitingRegion --(non-empty region)--> AwaitingBucketAndFormat --> Done
//!       ^   |
//!       +---+ (empty region picked: notice, ask again)
//!
//! any state --(operator interrupt)--> Terminated
//! ```
//!
//! Only valid choices are ever offered, so the returned bucket always belongs
//! to the returned region.

use tracing::debug;

use crate::error::SelectError;
use crate::prompt::{Prompter, Question};
use crate::types::{OutputFormat, RegionInventory, Selection};

#[derive(Debug)]
enum State {
    AwaitingRegion,
    AwaitingBucketAndFormat { region: usize },
    Done(Selection),
    Terminated,
}

/// Drives a [`Prompter`] through the selection rounds.
#[derive(Debug)]
pub struct InteractiveSelector<'a, P> {
    prompter: &'a mut P,
}

impl<'a, P: Prompter> InteractiveSelector<'a, P> {
    /// Create a selector asking through `prompter`.
    pub fn new(prompter: &'a mut P) -> Self {
        Self { prompter }
    }

    /// Ask the operator for a region, then a bucket and an output format.
    ///
    /// Fails with [`SelectError::NoBuckets`] without prompting when no region
    /// has any bucket.
    pub fn select(&mut self, inventory: &[RegionInventory]) -> Result<Selection, SelectError> {
        if inventory.iter().all(RegionInventory::is_empty) {
            return Err(SelectError::NoBuckets);
        }

        let mut state = State::AwaitingRegion;
        loop {
            state = match state {
                State::AwaitingRegion => self.await_region(inventory)?,
                State::AwaitingBucketAndFormat { region } => {
                    self.await_bucket_and_format(&inventory[region])?
                }
                State::Done(selection) => {
                    debug!(
                        region = %selection.region,
                        bucket = %selection.bucket_name,
                        format = %selection.format,
                        "selection completed"
                    );
                    return Ok(selection);
                }
                State::Terminated => return Err(SelectError::Interrupted),
            };
        }
    }

    fn await_region(&mut self, inventory: &[RegionInventory]) -> Result<State, SelectError> {
        let question = Question::new(
            "Select an AWS region:",
            inventory.iter().map(RegionInventory::label).collect(),
        );
        let Some(region) = self.ask(&[question])?.map(|answer| answer[0]) else {
            return Ok(State::Terminated);
        };

        let chosen = &inventory[region];
        if chosen.is_empty() {
            self.prompter
                .notify(&format!("{} has no buckets, pick another region.", chosen.region()))?;
            return Ok(State::AwaitingRegion);
        }
        Ok(State::AwaitingBucketAndFormat { region })
    }

    fn await_bucket_and_format(&mut self, chosen: &RegionInventory) -> Result<State, SelectError> {
        let questions = [
            Question::new(
                format!("Select a bucket in {}:", chosen.region()),
                chosen.bucket_names().to_vec(),
            ),
            Question::new(
                "Select output format:",
                OutputFormat::ALL.iter().map(|f| f.label().to_owned()).collect(),
            ),
        ];
        let Some(answer) = self.ask(&questions)? else {
            return Ok(State::Terminated);
        };

        Ok(State::Done(Selection {
            region: chosen.region().clone(),
            bucket_name: chosen.bucket_names()[answer[0]].clone(),
            format: OutputFormat::ALL[answer[1]],
        }))
    }

    /// Ask one round; `None` means the operator interrupted.
    ///
    /// Answers are checked against the offered choices.
    fn ask(&mut self, questions: &[Question]) -> Result<Option<Vec<usize>>, SelectError> {
        let answer = match self.prompter.ask(questions) {
            Ok(answer) => answer,
            Err(e) => {
                return match SelectError::from(e) {
                    SelectError::Interrupted => Ok(None),
                    other => Err(other),
                };
            }
        };

        if answer.len() != questions.len() {
            return Err(SelectError::InvalidAnswer {
                question: questions.first().map(|q| q.message.clone()).unwrap_or_default(),
                index: answer.len(),
                len: questions.len(),
            });
        }
        for (question, &index) in questions.iter().zip(&answer) {
            if index >= question.choices.len() {
                return Err(SelectError::InvalidAnswer {
                    question: question.message.clone(),
                    index,
                    len: question.choices.len(),
                });
            }
        }
        Ok(Some(answer))
    }
}
