//! The recovery policy: advances one agent by one tick.

use jamnav_agent::Agent;
use jamnav_core::{Position, RecoveryPhase, clamp_to_step, discretize_path};
use jamnav_zone::ZoneSet;

use crate::{RecoveryError, RecoveryResult, StepOutcome};

/// Applies the jamming model and the recovery state machine to agents.
///
/// Stateless apart from the step bound and the shared mission endpoint;
/// all per-agent state lives on [`Agent`].  The stepper calls, per tick:
///
/// 1. [`detect_entry`](Self::detect_entry) for every agent,
/// 2. a heading strategy for every agent where
///    [`needs_heading`](Self::needs_heading) holds,
/// 3. [`advance`](Self::advance) for every agent, passing the heading.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RecoveryPolicy {
    max_step:    f64,
    mission_end: Position,
}

impl RecoveryPolicy {
    pub fn new(max_step: f64, mission_end: Position) -> RecoveryResult<Self> {
        if !(max_step.is_finite() && max_step > 0.0) {
            return Err(RecoveryError::InvalidStep(max_step));
        }
        mission_end.validate()?;
        Ok(Self { max_step, mission_end })
    }

    #[inline]
    pub fn max_step(&self) -> f64 {
        self.max_step
    }

    #[inline]
    pub fn mission_end(&self) -> Position {
        self.mission_end
    }

    /// Initialise an agent at its starting position.
    ///
    /// Sets the jammed flag from the zones, records the start as safe when
    /// it is clear, and plans the path to the agent's goal.
    pub fn place(&self, agent: &mut Agent, zones: &ZoneSet) {
        agent.set_jammed(zones.is_jammed(agent.position));
        agent.recovery_phase = RecoveryPhase::None;
        agent.mark_safe();
        let goal = agent.goal_or(self.mission_end);
        agent.set_path(discretize_path(agent.position, goal, self.max_step));
    }

    /// Entry detection, run at the start of every tick.
    ///
    /// Sets `jammed` on the clear to jammed edge.  Entry into
    /// `ReturningToSafe` is level-triggered: any jammed agent that is not
    /// already recovering starts retreating, including one that applied a
    /// still-jammed heading on the previous tick.
    ///
    /// Returns `true` if the agent entered `ReturningToSafe`.
    pub fn detect_entry(&self, agent: &mut Agent, zones: &ZoneSet) -> bool {
        if !agent.jammed && zones.is_jammed(agent.position) {
            agent.set_jammed(true);
            tracing::debug!(agent = %agent.name, position = %agent.position, "entered jamming zone");
        }
        if agent.jammed && agent.recovery_phase == RecoveryPhase::None {
            agent.recovery_phase = RecoveryPhase::ReturningToSafe;
            tracing::debug!(
                agent = %agent.name,
                phase = RecoveryPhase::ReturningToSafe.as_str(),
                target = %agent.last_safe(),
                "recovery started"
            );
            return true;
        }
        false
    }

    /// `true` if `advance` needs a heading for this agent this tick.
    #[inline]
    pub fn needs_heading(agent: &Agent) -> bool {
        agent.recovery_phase == RecoveryPhase::AwaitingNewHeading
    }

    /// Advance `agent` by one tick according to its recovery phase.
    ///
    /// `heading` is consumed only in `AwaitingNewHeading` and is applied
    /// as-is; strategies own the one-step bound.
    ///
    /// # Errors
    /// [`RecoveryError::MissingHeading`] if the agent awaits a heading and
    /// `heading` is `None`.  The agent is left unchanged.
    pub fn advance(
        &self,
        agent:   &mut Agent,
        zones:   &ZoneSet,
        heading: Option<Position>,
    ) -> RecoveryResult<StepOutcome> {
        match agent.recovery_phase {
            RecoveryPhase::ReturningToSafe => Ok(self.retreat(agent)),
            RecoveryPhase::AwaitingNewHeading => {
                let heading = heading.ok_or_else(|| RecoveryError::MissingHeading(agent.name.clone()))?;
                Ok(self.apply_heading(agent, zones, heading))
            }
            RecoveryPhase::None if agent.jammed => Ok(StepOutcome::Idle),
            RecoveryPhase::None => Ok(Self::travel(agent, zones)),
        }
    }

    fn retreat(&self, agent: &mut Agent) -> StepOutcome {
        let target = agent.last_safe();
        if agent.position.distance(target) > self.max_step {
            agent.position = clamp_to_step(agent.position, target, self.max_step);
            return StepOutcome::Retreating(agent.position);
        }
        agent.position = target;
        agent.recovery_phase = RecoveryPhase::AwaitingNewHeading;
        tracing::debug!(
            agent = %agent.name,
            phase = RecoveryPhase::AwaitingNewHeading.as_str(),
            position = %target,
            "reached safe position"
        );
        StepOutcome::ReachedSafe(target)
    }

    fn apply_heading(&self, agent: &mut Agent, zones: &ZoneSet, heading: Position) -> StepOutcome {
        agent.position = heading;
        agent.recovery_phase = RecoveryPhase::None;

        if zones.is_jammed(heading) {
            tracing::debug!(agent = %agent.name, position = %heading, "new heading is still jammed");
            return StepOutcome::StillJammed(heading);
        }

        agent.set_jammed(false);
        let goal = agent.goal_or(self.mission_end);
        agent.set_path(discretize_path(heading, goal, self.max_step));
        tracing::info!(agent = %agent.name, position = %heading, "cleared jamming zone, resuming mission");
        StepOutcome::Cleared(heading)
    }

    /// Normal travel; the agent is clear and not recovering.
    fn travel(agent: &mut Agent, zones: &ZoneSet) -> StepOutcome {
        let Some(next) = agent.pending_path.pop_front() else {
            return StepOutcome::Idle;
        };
        // The position being left is known clear.
        agent.mark_safe();
        agent.position = next;

        if zones.is_jammed(next) {
            agent.set_jammed(true);
            tracing::debug!(agent = %agent.name, position = %next, "waypoint is jammed");
            return StepOutcome::EnteredZone(next);
        }
        StepOutcome::Travelled(next)
    }
}
