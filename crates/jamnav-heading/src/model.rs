//! The `HeadingStrategy` trait, the pluggable recovery decision.

use std::sync::Arc;

use jamnav_core::{AgentRng, Position};

use crate::HeadingRequest;

/// Picks a new coordinate for an agent that has retreated to safety.
///
/// # Contract
///
/// The returned coordinate is within `request.max_step` of
/// `request.position` (up to 3-decimal rounding) and inside
/// `request.field`.  Strategies should prefer a coordinate outside every
/// jamming zone but are allowed to return a jammed one; the recovery
/// policy applies the result as-is and re-enters recovery on the next tick.
///
/// `select` never fails: strategies degrade internally (retry, fallback)
/// rather than surfacing an error to the stepper.
///
/// # Thread safety
///
/// With the `parallel` feature of `jamnav-sim`, `select` may run for many
/// agents at once, so implementations must be `Send + Sync`.  Randomness
/// comes only from the per-agent `rng`.
pub trait HeadingStrategy: Send + Sync {
    fn select(&self, request: &HeadingRequest<'_>, rng: &mut AgentRng) -> Position;

    /// Short label for log fields.
    fn name(&self) -> &'static str;
}

impl<H: HeadingStrategy + ?Sized> HeadingStrategy for Box<H> {
    fn select(&self, request: &HeadingRequest<'_>, rng: &mut AgentRng) -> Position {
        (**self).select(request, rng)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<H: HeadingStrategy + ?Sized> HeadingStrategy for Arc<H> {
    fn select(&self, request: &HeadingRequest<'_>, rng: &mut AgentRng) -> Position {
        (**self).select(request, rng)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
