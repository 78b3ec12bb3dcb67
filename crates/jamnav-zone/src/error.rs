//! Jamming-zone error type.

use thiserror::Error;

use jamnav_core::Position;

/// Errors produced while constructing jamming zones.
#[derive(Debug, Error)]
pub enum ZoneError {
    #[error("zone radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("zone center {0} is not finite")]
    InvalidCenter(Position),
}

pub type ZoneResult<T> = Result<T, ZoneError>;
