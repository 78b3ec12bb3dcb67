//! Scripted random-direction search.

use jamnav_core::{AgentRng, Position};

use crate::{HeadingRequest, HeadingStrategy};

/// Random headings tried before escaping directly away from a zone.
pub const DEFAULT_ATTEMPTS: u32 = 10;

/// Picks a random one-step move that lands outside every zone.
///
/// Up to `attempts` uniformly random headings are tried, each projected
/// `max_step` from the current position and clamped to the field.  If none
/// is clear, the agent steps directly away from the nearest zone centre
/// (or along a random heading when it sits exactly on that centre).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScriptedHeading {
    pub attempts: u32,
}

impl Default for ScriptedHeading {
    fn default() -> Self {
        Self { attempts: DEFAULT_ATTEMPTS }
    }
}

impl ScriptedHeading {
    pub fn new(attempts: u32) -> Self {
        Self { attempts }
    }

    fn project(req: &HeadingRequest<'_>, (dx, dy): (f64, f64)) -> Position {
        req.field.clamp(req.position.offset(dx, dy, req.max_step).rounded())
    }

    /// One step straight away from the nearest zone centre.
    fn escape(req: &HeadingRequest<'_>, rng: &mut AgentRng) -> Position {
        let away = req.zones.nearest(req.position).and_then(|zone| {
            let (dx, dy) = (req.position.x - zone.center.x, req.position.y - zone.center.y);
            let len = dx.hypot(dy);
            (len > 0.0).then(|| (dx / len, dy / len))
        });
        let dir = away.unwrap_or_else(|| rng.unit_direction());
        Self::project(req, dir)
    }
}

impl HeadingStrategy for ScriptedHeading {
    fn select(&self, req: &HeadingRequest<'_>, rng: &mut AgentRng) -> Position {
        for _ in 0..self.attempts {
            let candidate = Self::project(req, rng.unit_direction());
            if !req.zones.is_jammed(candidate) {
                return candidate;
            }
        }
        tracing::debug!(
            agent = req.agent,
            attempts = self.attempts,
            "no clear random heading, stepping away from nearest zone"
        );
        Self::escape(req, rng)
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
