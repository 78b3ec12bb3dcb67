use jamnav_agent::AgentError;
use jamnav_core::{JamError, Position};
use jamnav_heading::HeadingError;
use jamnav_recovery::RecoveryError;
use jamnav_zone::ZoneError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] JamError),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("agent {name} starts at {position}, outside the field")]
    StartOutsideField { name: String, position: Position },

    #[error("mission end {0} is outside the field")]
    MissionEndOutsideField(Position),

    #[error("agent {name} has goal {goal}, outside the field")]
    GoalOutsideField { name: String, goal: Position },

    #[error("zone error: {0}")]
    Zone(#[from] ZoneError),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("recovery error: {0}")]
    Recovery(#[from] RecoveryError),

    #[error("heading strategy error: {0}")]
    Heading(#[from] HeadingError),
}

pub type SimResult<T> = Result<T, SimError>;
