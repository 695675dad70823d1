//! The quiz session: sampling, the state machine, and scoring.

mod sampler;
mod scorer;
mod state;

use thiserror::Error;

pub use sampler::sample;
pub use scorer::{percent, score};
pub use state::{Phase, QuizSession};

/// Usage errors from session operations.
///
/// These indicate a caller that ignored the state machine's preconditions;
/// the presenter logs them instead of surfacing them to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("cannot draw {0} questions from the bank")]
    InvalidCount(usize),
    #[error("the session has already been started")]
    AlreadyStarted,
    #[error("the session is not in progress")]
    NotInProgress,
    #[error("question position {position} is out of range (the session has {len} questions)")]
    InvalidPosition { position: usize, len: usize },
    #[error("{key:?} is not an option of the question at position {position}")]
    InvalidOption { position: usize, key: String },
}
