//! `lc-perception` — what a creature can see and whether it stands on ground.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`query`]   | `SpatialQuery` trait, `RayHit`, `OpenSpace`                 |
//! | [`scene`]   | `StaticScene` (ground plane + R-tree of boxes), `Aabb`      |
//! | [`vision`]  | `ViewCone`, `fov_dot_threshold`, `can_see`                  |
//! | [`ground`]  | `is_grounded`                                               |
//!
//! The host engine owns the real collision world.  It plugs in by
//! implementing [`SpatialQuery`]; [`StaticScene`] is a self-contained
//! implementation for tests, demos and headless sessions.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod ground;
pub mod query;
pub mod scene;
pub mod vision;

#[cfg(test)]
mod tests;

pub use ground::{GROUND_PROBE_DISTANCE, is_grounded};
pub use query::{OpenSpace, RayHit, SpatialQuery};
pub use scene::{Aabb, StaticScene};
pub use vision::{OCCLUSION_MARGIN, ViewCone, can_see, fov_dot_threshold};
