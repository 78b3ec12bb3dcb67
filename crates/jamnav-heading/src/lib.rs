//! `jamnav-heading`: heading selection for agents recovering from jamming.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`context`] | `HeadingRequest<'a>`, the read-only view a strategy consults      |
//! | [`model`]   | `HeadingStrategy` trait                                           |
//! | [`scripted`]| `ScriptedHeading`, random clear-direction search with escape      |
//! | [`llm`]     | `LlmHeading`, prompt builder, response parser, `LlmClient` seam   |
//! | [`config`]  | `StrategyConfig`, `build_strategy`                                |
//! | [`error`]   | `LlmError`, `AttemptError`, `HeadingError`, `HeadingResult<T>`    |
//!
//! # Design notes
//!
//! A strategy is consulted once per tick for each agent that has finished
//! retreating (`AwaitingNewHeading`).  It only reads the request and draws
//! from the agent's own RNG, so the stepper may fan requests out across
//! threads and apply the results afterwards in registry order.
//!
//! # Feature flags
//!
//! | Feature | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on config types   |

pub mod config;
pub mod context;
pub mod error;
pub mod llm;
pub mod model;
pub mod scripted;

#[cfg(test)]
mod tests;

pub use config::{ScriptedConfig, StrategyConfig, build_strategy};
pub use context::HeadingRequest;
pub use error::{AttemptError, HeadingError, HeadingResult, LlmError};
pub use llm::client::{DEFAULT_MAX_IN_FLIGHT, DeadlineClient, LlmClient};
pub use llm::parse::{ResponseParser, parse_coordinate};
pub use llm::prompt::build_prompt;
pub use llm::{LlmConfig, LlmHeading};
pub use model::HeadingStrategy;
pub use scripted::ScriptedHeading;
