//! `lc-orientation` — turn a body toward a point at a bounded angular speed.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`look`]  | `look_rotation`, `rotate_towards`, `turn_toward`, `Facing` |
//!
//! Each call advances the rotation by at most `speed * dt` degrees, so a
//! fixed target is reached after `angle / (speed * dt)` calls and never
//! overshot.  With `yaw_only` the vertical component of the look direction
//! is discarded first, which keeps the body upright (billboard turning).

pub mod look;


pub use look::{Facing, look_rotation, rotate_towards, turn_toward};
