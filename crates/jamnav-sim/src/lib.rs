//! `jamnav-sim`: tick stepper for swarms navigating around jamming zones.
//!
//! # Three-phase tick loop
//!
//! ```text
//! tick 0: placement (jammed flag, safe position, path, history sample)
//! for tick in 1..=config.total_ticks:
//!   ① Entry     : flag agents standing in a zone; jammed agents that are
//!                 not recovering start ReturningToSafe.
//!   ② Headings  : HeadingStrategy::select for each AwaitingNewHeading agent
//!                 (parallel with the `parallel` feature).
//!   ③ Advance   : RecoveryPolicy::advance for every agent in ascending
//!                 AgentId order; append history; emit a TickRecord.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the heading phase on Rayon's thread pool.         |
//! | `fx-hash`  | FxHash for the registry's name index.                  |
//! | `serde`    | Serde derives on `ScenarioConfig` and `TickRecord`.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use jamnav_agent::RegistryBuilder;
//! use jamnav_core::{FieldBounds, Position, SimConfig};
//! use jamnav_heading::ScriptedHeading;
//! use jamnav_sim::{NoopObserver, SimBuilder};
//!
//! let (agents, rngs) = RegistryBuilder::new(42).random_agents(10, field, 1.0).build()?;
//! let mut sim = SimBuilder::new(config, field, agents, rngs, ScriptedHeading::default())
//!     .zones(zones)
//!     .mission_end(Position::new(10.0, 10.0))
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod record;
pub mod scenario;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use record::TickRecord;
pub use scenario::{AgentStart, AgentsConfig, ScenarioConfig};
pub use sim::Sim;
