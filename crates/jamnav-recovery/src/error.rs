use jamnav_core::JamError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error("max step must be positive and finite, got {0}")]
    InvalidStep(f64),

    #[error("invalid mission end: {0}")]
    MissionEnd(#[from] JamError),

    #[error("agent {0} is awaiting a heading but none was supplied")]
    MissingHeading(String),
}

pub type RecoveryResult<T> = Result<T, RecoveryError>;
