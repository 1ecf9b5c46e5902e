//! Rigid transform and world-axis conventions.
//!
//! The controller uses a Y-up world: `+Y` is up and a body's forward axis is
//! its local `+Z`.  Vector math is `glam` (single precision), re-exported here
//! so downstream crates agree on one version.

pub use glam::{Quat, Vec2, Vec3};

/// World up axis.
pub const UP: Vec3 = Vec3::Y;

/// Local forward axis of every body.
pub const FORWARD: Vec3 = Vec3::Z;

/// Position and orientation of a body, as read from the host each tick.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Transform {
    #[inline]
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Transform at `position` facing world `+Z`.
    #[inline]
    pub fn from_position(position: Vec3) -> Self {
        Self { position, rotation: Quat::IDENTITY }
    }

    /// Unit vector the body is facing.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation * FORWARD
    }

    /// `false` if any component is NaN/infinite or the rotation is not a
    /// unit quaternion.  Hosts may hand over garbage for despawned bodies.
    pub fn is_valid(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite() && self.rotation.is_normalized()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::from_position(Vec3::ZERO)
    }
}
