//! `jamnav-core`: foundational types for the `jamnav` swarm navigation engine.
//!
//! This crate is a dependency of every other `jamnav-*` crate.  It has no
//! `jamnav-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `ZoneId`                                   |
//! | [`geo`]         | `Position`, `FieldBounds`, 3-decimal rounding         |
//! | [`step`]        | `max_step`, `clamp_to_step`, `discretize_path`        |
//! | [`comm`]        | `CommQuality` high/low constants                      |
//! | [`phase`]       | `RecoveryPhase` enum                                  |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`error`]       | `JamError`, `JamResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types; needed for scenario files. |

pub mod comm;
pub mod error;
pub mod geo;
pub mod ids;
pub mod phase;
pub mod rng;
pub mod step;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use comm::CommQuality;
pub use error::{JamError, JamResult};
pub use geo::{FieldBounds, Position, round3};
pub use ids::{AgentId, ZoneId};
pub use phase::RecoveryPhase;
pub use rng::{AgentRng, SimRng};
pub use step::{MAX_STEP_DIVISOR, clamp_to_step, discretize_path, max_step};
pub use time::{SimClock, SimConfig, Tick};
