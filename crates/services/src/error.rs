//! Shared error types for the services crate.

use thiserror::Error;

use senso_core::model::{GameSummaryError, SequenceError};

/// Errors emitted by `GameService`.
///
/// A wrong press is not an error; it is reported through `PressResult`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GameError {
    #[error("no game has been started")]
    NotStarted,
    #[error("game already finished")]
    Finished,
    #[error("current level is still in progress")]
    LevelInProgress,
    #[error(transparent)]
    Sequence(#[from] SequenceError),
    #[error(transparent)]
    Summary(#[from] GameSummaryError),
}
