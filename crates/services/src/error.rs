//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{ScoreError, SubjectId};
use storage::repository::StorageError;
use storage::DeckLoadError;

/// Errors emitted by `SessionBuilder`. No session is created when one occurs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuildError {
    #[error("range {start}..={end} is not valid for a deck of {len} questions")]
    Range { start: usize, end: usize, len: usize },
    #[error("question count must be at least 1")]
    InvalidCount,
    #[error("subject has no questions")]
    EmptyDeck,
}

/// Errors emitted by `DeckService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeckServiceError {
    #[error("unknown subject: {0}")]
    UnknownSubject(SubjectId),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by the question session and run orchestration.
///
/// A rejected operation leaves the session exactly as it was.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,
    #[error("session is not in progress")]
    NotActive,
    #[error("answer the current question before moving on")]
    AnswerRequired,
    #[error("answer {index} is outside 0..{len}")]
    InvalidAnswer { index: usize, len: usize },
    #[error("position {position} is outside 0..{len}")]
    InvalidPosition { position: usize, len: usize },
    #[error("already at the first question")]
    AtFirstQuestion,
    #[error("navigation slot {slot} has no question")]
    EmptySlot { slot: usize },
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Deck(#[from] DeckServiceError),
    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Load(#[from] DeckLoadError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
