use std::time::Duration;

use thiserror::Error;

/// Failure reported by an [`LlmClient`](crate::LlmClient) transport.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LlmError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("no reply within {0:?}")]
    Timeout(Duration),

    #[error("{0} requests already in flight")]
    Busy(usize),
}

/// Why a single heading request attempt produced no coordinate.
///
/// Every variant is retryable; the retry loop inspects the kind for
/// logging only.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AttemptError {
    #[error(transparent)]
    Transport(#[from] LlmError),

    #[error("reply is {len} characters, budget is {max}")]
    TooLong { len: usize, max: usize },

    #[error("no coordinate pair found in reply")]
    Unparseable,
}

#[derive(Debug, Error)]
pub enum HeadingError {
    #[error("LLM strategy configured but no LLM client was supplied")]
    MissingClient,

    #[error("heading configuration error: {0}")]
    Config(String),
}

pub type HeadingResult<T> = Result<T, HeadingError>;
