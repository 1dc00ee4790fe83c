//! Shared error types for the services crate.

use thiserror::Error;

use study_core::model::{LearnSettingsError, SummaryError};
use study_core::random::DistractorError;

/// Errors emitted by session engines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session needs at least {required} cards, got {available}")]
    InsufficientCards { required: usize, available: usize },
    #[error("invalid learn configuration: {0}")]
    Configuration(#[from] LearnSettingsError),
    #[error("queue is empty, session is complete")]
    EmptyQueue,
    #[error("session already completed")]
    Completed,
    #[error("no question is waiting for an answer")]
    NoActiveQuestion,
    #[error("answer does not fit the question format")]
    AnswerMismatch,
    #[error("option {index} does not exist, question has {len} options")]
    InvalidOption { index: usize, len: usize },
    #[error(transparent)]
    Distractor(#[from] DistractorError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
}

impl SessionError {
    pub(crate) fn require_cards(required: usize, available: usize) -> Result<(), Self> {
        if available < required {
            return Err(Self::InsufficientCards {
                required,
                available,
            });
        }
        Ok(())
    }
}
