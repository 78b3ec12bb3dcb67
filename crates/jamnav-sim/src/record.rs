//! The per-agent, per-tick output payload.

use jamnav_agent::Agent;
use jamnav_core::Position;

/// One agent's state at the end of a tick.
///
/// Downstream loggers key off exactly these four fields and attach their
/// own timestamp; keep the shape stable.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickRecord {
    pub agent_id:              String,
    pub position:              Position,
    pub communication_quality: f64,
    pub jammed:                bool,
}

impl From<&Agent> for TickRecord {
    fn from(agent: &Agent) -> Self {
        Self {
            agent_id:              agent.name.clone(),
            position:              agent.position,
            communication_quality: agent.communication_quality,
            jammed:                agent.jammed,
        }
    }
}
