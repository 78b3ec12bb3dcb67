//! `jamnav-zone`: circular jamming zones and membership queries.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                      |
//! |-----------|---------------------------------------------------------------|
//! | [`zone`]  | `JammingZone` (immutable disk), free fn `is_jammed`           |
//! | [`set`]   | `ZoneSet`, an R-tree indexed union of disks, nearest-zone query |
//! | [`error`] | `ZoneError`, `ZoneResult<T>`                                  |
//!
//! # Semantics
//!
//! A position is jammed when its Euclidean distance to **any** zone centre
//! is `<= radius` (boundary inclusive).  Zones never change after the set
//! is built.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `JammingZone`.          |

pub mod error;
pub mod set;
pub mod zone;


pub use error::{ZoneError, ZoneResult};
pub use set::ZoneSet;
pub use zone::{JammingZone, is_jammed};
