//! `jamnav-recovery`: the per-agent jamming recovery state machine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`policy`]  | `RecoveryPolicy`: placement, entry detection, `advance`         |
//! | [`outcome`] | `StepOutcome`, what one tick did to one agent                   |
//! | [`error`]   | `RecoveryError`, `RecoveryResult<T>`                            |
//!
//! # State machine
//!
//! ```text
//!            jammed && None
//!   None ─────────────────────▶ ReturningToSafe
//!    ▲                                │  within one step of safe position
//!    │   heading applied              ▼
//!    └────────────────────────── AwaitingNewHeading
//! ```
//!
//! 1. **Entry**: a clear agent whose position is jammed gets `jammed = true`
//!    and LOW quality.  Any jammed agent in `None` starts retreating.
//! 2. **ReturningToSafe**: one clamped step toward the last safe position;
//!    snap onto it when within `max_step`.
//! 3. **AwaitingNewHeading**: move to the strategy's coordinate and return
//!    to `None`.  If clear, restore HIGH quality and re-plan to the goal.
//! 4. **None, clear**: record the current position as safe, then move to
//!    the next waypoint.  A jammed waypoint sets `jammed` immediately.

pub mod error;
pub mod outcome;
pub mod policy;


pub use error::{RecoveryError, RecoveryResult};
pub use outcome::StepOutcome;
pub use policy::RecoveryPolicy;
