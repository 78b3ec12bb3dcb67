//! Recovery phase enum shared by the agent registry and the recovery policy.

/// Where an agent stands in the jammed-agent recovery cycle.
///
/// `None → ReturningToSafe → AwaitingNewHeading → None`, repeated each time
/// the agent finds itself jammed with no recovery in progress.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecoveryPhase {
    /// Normal mission travel (or idle after arrival).
    #[default]
    None,
    /// Retreating toward the last safe position, one step per tick.
    ReturningToSafe,
    /// Parked on the safe position; the next tick asks for a new heading.
    AwaitingNewHeading,
}

impl RecoveryPhase {
    /// `true` while a recovery cycle is in progress.
    #[inline]
    pub fn is_recovering(self) -> bool {
        !matches!(self, RecoveryPhase::None)
    }

    /// Label used in log fields and CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            RecoveryPhase::None               => "none",
            RecoveryPhase::ReturningToSafe    => "returning_to_safe",
            RecoveryPhase::AwaitingNewHeading => "awaiting_new_heading",
        }
    }
}

impl std::fmt::Display for RecoveryPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
