//! The per-agent record mutated by the simulation stepper.

use std::collections::VecDeque;

use jamnav_core::{CommQuality, Position, RecoveryPhase, Tick};

/// Default number of history entries kept per agent.
pub const DEFAULT_HISTORY_CAPACITY: usize = 256;

/// One recorded sample of an agent's trajectory.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEntry {
    pub tick:                  Tick,
    pub position:              Position,
    pub communication_quality: f64,
}

/// Mutable state of one mobile agent.
///
/// `communication_quality` is kept in lock-step with `jammed`; mutate the
/// flag only through [`Agent::set_jammed`].
#[derive(Clone, Debug)]
pub struct Agent {
    /// Stable string identifier, unique within a run.
    pub name: String,

    /// Current coordinate.
    pub position: Position,

    /// `CommQuality::HIGH` when clear, `CommQuality::LOW` when jammed.
    pub communication_quality: f64,

    /// `true` while inside any jamming zone.
    pub jammed: bool,

    /// Most recent position recorded while clear.  `None` until the agent
    /// has been observed clear at least once.
    pub last_safe_position: Option<Position>,

    /// Waypoints still to traverse toward the travel goal; one per tick.
    pub pending_path: VecDeque<Position>,

    pub recovery_phase: RecoveryPhase,

    /// Per-agent override of the shared mission endpoint.
    pub goal: Option<Position>,

    history:          VecDeque<HistoryEntry>,
    history_capacity: usize,
}

impl Agent {
    /// A clear, idle agent at `position` with an empty history.
    pub fn new(name: impl Into<String>, position: Position, history_capacity: usize) -> Self {
        Self {
            name: name.into(),
            position,
            communication_quality: CommQuality::HIGH,
            jammed: false,
            last_safe_position: None,
            pending_path: VecDeque::new(),
            recovery_phase: RecoveryPhase::None,
            goal: None,
            history: VecDeque::with_capacity(history_capacity.min(64)),
            history_capacity: history_capacity.max(1),
        }
    }

    /// Set the jammed flag and the matching communication quality.
    #[inline]
    pub fn set_jammed(&mut self, jammed: bool) {
        self.jammed = jammed;
        self.communication_quality = CommQuality::for_jammed(jammed);
    }

    /// Record the current position as the last safe one.
    ///
    /// Ignored while jammed, so the safe position can only ever hold
    /// positions that were clear when recorded.
    #[inline]
    pub fn mark_safe(&mut self) {
        if !self.jammed {
            self.last_safe_position = Some(self.position);
        }
    }

    /// The position to retreat to while jammed.
    ///
    /// Stored safe position first, then the newest history entry recorded
    /// with high quality, then the current position.
    pub fn last_safe(&self) -> Position {
        if let Some(p) = self.last_safe_position {
            return p;
        }
        self.history
            .iter()
            .rev()
            .find(|e| CommQuality::is_high(e.communication_quality))
            .map(|e| e.position)
            .unwrap_or(self.position)
    }

    /// Travel goal: the override if set, else `mission_end`.
    #[inline]
    pub fn goal_or(&self, mission_end: Position) -> Position {
        self.goal.unwrap_or(mission_end)
    }

    /// Replace the pending path.
    pub fn set_path(&mut self, path: Vec<Position>) {
        self.pending_path = path.into();
    }

    /// `true` once the path is consumed and no recovery is in progress.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.pending_path.is_empty() && !self.recovery_phase.is_recovering()
    }

    // ── History ───────────────────────────────────────────────────────────

    /// Append the current state as a history sample, evicting the oldest
    /// entry once capacity is reached.
    pub fn record(&mut self, tick: Tick) {
        if self.history.len() == self.history_capacity {
            self.history.pop_front();
        }
        self.history.push_back(HistoryEntry {
            tick,
            position:              self.position,
            communication_quality: self.communication_quality,
        });
    }

    /// All retained samples, oldest first.
    pub fn history(&self) -> &VecDeque<HistoryEntry> {
        &self.history
    }

    /// The newest `n` samples, oldest first.
    pub fn recent_history(&self, n: usize) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter().skip(self.history.len().saturating_sub(n))
    }
}
