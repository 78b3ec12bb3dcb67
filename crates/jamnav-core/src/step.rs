//! Single-tick movement primitives.
//!
//! All movement within one tick is bounded by `max_step`, derived once from
//! the field diagonal.  [`discretize_path`] is defined in terms of
//! [`clamp_to_step`], so consuming a path one waypoint per tick and
//! stepping with `clamp_to_step` produce identical trajectories.

use crate::{FieldBounds, Position};

/// Fixed granularity constant: a tick covers `diagonal / 20`.
pub const MAX_STEP_DIVISOR: f64 = 20.0;

/// Waypoints reserved up front; longer paths grow as they go.
const MAX_PREALLOC: usize = 1024;

/// Per-tick movement bound for `field`.
#[inline]
pub fn max_step(field: &FieldBounds) -> f64 {
    field.diagonal() / MAX_STEP_DIVISOR
}

/// Move from `current` toward `target` by at most `max_step`.
///
/// Returns `target` unchanged when it is reachable this tick (including the
/// zero-distance case); otherwise the point `max_step` along the line,
/// rounded to three decimals.
pub fn clamp_to_step(current: Position, target: Position, max_step: f64) -> Position {
    let dist = current.distance(target);
    if dist <= max_step || dist == 0.0 {
        return target;
    }
    let (ux, uy) = ((target.x - current.x) / dist, (target.y - current.y) / dist);
    current.offset(ux, uy, max_step).rounded()
}

/// Waypoints from `start` (exclusive) to `end` (inclusive), one per tick.
///
/// Consecutive waypoints are at most `max_step` apart (up to rounding) and
/// the final waypoint is exactly `end`.  `start == end` yields `[end]`.
pub fn discretize_path(start: Position, end: Position, max_step: f64) -> Vec<Position> {
    if !(max_step.is_finite() && max_step > 0.0) {
        return vec![end];
    }

    // Each clamped step shrinks the remaining distance by ~max_step; the
    // slack absorbs rounding so the loop is provably finite.
    let budget = ((start.distance(end) / max_step).ceil() as usize).saturating_add(2);
    let mut path = Vec::with_capacity(budget.min(MAX_PREALLOC));
    let mut current = start;

    for _ in 0..budget {
        let next = clamp_to_step(current, end, max_step);
        path.push(next);
        if next == end {
            return path;
        }
        current = next;
    }

    path.push(end);
    path
}
