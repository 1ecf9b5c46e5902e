//! `lc-core` — foundational types for the laser-cat creature controller.
//!
//! This crate is a dependency of every other `lc-*` crate.  It has no `lc-*`
//! dependencies and few external ones (`glam`, `rand`, `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `ParticipantId`, `TargetId`                |
//! | [`transform`]   | `Transform`, world axes, `Vec3`/`Quat` re-exports     |
//! | [`time`]        | `Tick`, `SimClock`, `Deadline`, `SimConfig`           |
//! | [`rng`]         | `AgentRng` (one stream per creature)                  |
//! | [`error`]       | `LcError`                                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod transform;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::LcError;
pub use ids::{AgentId, ParticipantId, TargetId};
pub use rng::AgentRng;
pub use time::{Deadline, SimClock, SimConfig, Tick};
pub use transform::{Quat, Transform, Vec2, Vec3};
