//! Two-valued communication quality.

/// Communication quality reported for an agent.
///
/// Quality is a strict function of the jammed flag: there are no
/// intermediate values in the engine.
pub struct CommQuality;

impl CommQuality {
    /// Reported while clear of every jamming zone.
    pub const HIGH: f64 = 1.0;

    /// Reported while inside any jamming zone.
    pub const LOW: f64 = 0.2;

    #[inline]
    pub fn for_jammed(jammed: bool) -> f64 {
        if jammed { Self::LOW } else { Self::HIGH }
    }

    /// `true` for a history entry recorded while the agent was clear.
    #[inline]
    pub fn is_high(quality: f64) -> bool {
        quality >= Self::HIGH
    }
}
