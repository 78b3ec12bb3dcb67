//! `jamnav-agent`: agent records and the registry that owns them.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`agent`]     | `Agent` record, `HistoryEntry`, safe-position lookup      |
//! | [`store`]     | `AgentRegistry` (id ↔ name ↔ record), `AgentRngs`         |
//! | [`builder`]   | `RegistryBuilder` (explicit and collision-free random starts) |
//! | [`error`]     | `AgentError`, `AgentResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | FxHash for the name index instead of SipHash.              |
//! | `serde`   | Derives `Serialize`/`Deserialize` on `HistoryEntry`.       |

pub mod agent;
pub mod builder;
pub mod error;
pub mod store;


pub use agent::{Agent, DEFAULT_HISTORY_CAPACITY, HistoryEntry};
pub use builder::RegistryBuilder;
pub use error::{AgentError, AgentResult};
pub use store::{AgentRegistry, AgentRngs};
