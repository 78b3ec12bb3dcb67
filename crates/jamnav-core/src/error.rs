//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `JamError` via `From`
//! where they surface core validation failures.

use thiserror::Error;

use crate::{FieldBounds, Position};

#[derive(Debug, Error, PartialEq)]
pub enum JamError {
    #[error("invalid field bounds {0}: ranges must be finite and non-empty")]
    InvalidField(FieldBounds),

    #[error("position {0} is not finite")]
    NonFinitePosition(Position),
}

/// Shorthand result type for `jamnav-core`.
pub type JamResult<T> = Result<T, JamError>;
