//! What one `advance` call did to an agent.

use std::fmt;

use jamnav_core::Position;

/// Result of advancing one agent by one tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// Nothing to do: path consumed and not recovering.
    Idle,

    /// Normal travel to the next waypoint, which is clear.
    Travelled(Position),

    /// Normal travel landed on a jammed waypoint; `jammed` is now set.
    EnteredZone(Position),

    /// One clamped step toward the safe position.
    Retreating(Position),

    /// Snapped onto the safe position; a heading is requested next tick.
    ReachedSafe(Position),

    /// Applied a heading that is still inside a zone.
    StillJammed(Position),

    /// Applied a clear heading; the path to the goal was regenerated.
    Cleared(Position),
}

impl StepOutcome {
    /// Position the agent holds after the step, if it moved.
    pub fn position(self) -> Option<Position> {
        match self {
            StepOutcome::Idle => None,
            StepOutcome::Travelled(p)
            | StepOutcome::EnteredZone(p)
            | StepOutcome::Retreating(p)
            | StepOutcome::ReachedSafe(p)
            | StepOutcome::StillJammed(p)
            | StepOutcome::Cleared(p) => Some(p),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StepOutcome::Idle           => "idle",
            StepOutcome::Travelled(_)   => "travelled",
            StepOutcome::EnteredZone(_) => "entered_zone",
            StepOutcome::Retreating(_)  => "retreating",
            StepOutcome::ReachedSafe(_) => "reached_safe",
            StepOutcome::StillJammed(_) => "still_jammed",
            StepOutcome::Cleared(_)     => "cleared",
        }
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position() {
            Some(p) => write!(f, "{} {}", self.as_str(), p),
            None => f.write_str(self.as_str()),
        }
    }
}
