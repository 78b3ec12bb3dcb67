use thiserror::Error;

use jamnav_core::{FieldBounds, JamError, Position};

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent id {0:?} is already registered")]
    DuplicateName(String),

    #[error("agent {name:?} starts at non-finite position {position}")]
    InvalidStart { name: String, position: Position },

    #[error("agent {name:?} has non-finite goal {goal}")]
    InvalidGoal { name: String, goal: Position },

    #[error("placed {placed} of {requested} agents in {field} with separation {min_separation}")]
    Placement {
        placed:         usize,
        requested:      usize,
        field:          FieldBounds,
        min_separation: f64,
    },

    #[error(transparent)]
    Core(#[from] JamError),
}

pub type AgentResult<T> = Result<T, AgentError>;
