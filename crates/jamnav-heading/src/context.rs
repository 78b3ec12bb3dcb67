//! Read-only view of one agent passed to every heading strategy.

use std::collections::VecDeque;

use jamnav_agent::{Agent, HistoryEntry};
use jamnav_core::{FieldBounds, Position};
use jamnav_zone::ZoneSet;

/// Everything a [`HeadingStrategy`][crate::HeadingStrategy] may consult when
/// picking a new coordinate.
///
/// Built by the stepper for each agent in `AwaitingNewHeading`.  `position`
/// is the safe position the agent retreated to.
///
/// # Lifetimes
///
/// All borrows live for the duration of one tick's heading phase; the
/// registry is not mutated while a request is live.
pub struct HeadingRequest<'a> {
    /// Public agent identifier (used in prompts and log fields).
    pub agent:    &'a str,
    pub position: Position,
    /// Retained trajectory samples, oldest first.
    pub history:  &'a VecDeque<HistoryEntry>,
    pub field:    FieldBounds,
    pub zones:    &'a ZoneSet,
    pub max_step: f64,
}

impl<'a> HeadingRequest<'a> {
    #[inline]
    pub fn new(
        agent:    &'a Agent,
        field:    FieldBounds,
        zones:    &'a ZoneSet,
        max_step: f64,
    ) -> Self {
        Self {
            agent:    &agent.name,
            position: agent.position,
            history:  agent.history(),
            field,
            zones,
            max_step,
        }
    }

    /// The newest `n` history samples, oldest first.
    pub fn recent_history(&self, n: usize) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter().skip(self.history.len().saturating_sub(n))
    }
}
