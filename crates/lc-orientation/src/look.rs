//! Look rotations and bounded-rate turning.

use glam::Mat3;
use lc_core::transform::{FORWARD, UP};
use lc_core::{Quat, Transform, Vec3};

/// How a body should turn this tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Facing {
    /// Maximum turn rate in degrees per second.
    pub speed_deg: f32,
    /// Discard the vertical component of the look direction.
    pub yaw_only: bool,
}

impl Facing {
    pub const fn yaw(speed_deg: f32) -> Self {
        Self { speed_deg, yaw_only: true }
    }

    pub const fn free(speed_deg: f32) -> Self {
        Self { speed_deg, yaw_only: false }
    }
}

/// Rotation whose forward axis points along `dir` with `up` as the preferred
/// up vector.
///
/// Returns `None` for a zero-length `dir`.  When `dir` is parallel to `up`
/// the shortest-arc rotation from the forward axis is used instead.
pub fn look_rotation(dir: Vec3, up: Vec3) -> Option<Quat> {
    let forward = dir.try_normalize()?;
    let rotation = match up.cross(forward).try_normalize() {
        Some(right) => {
            let up = forward.cross(right);
            Quat::from_mat3(&Mat3::from_cols(right, up, forward))
        }
        None => Quat::from_rotation_arc(FORWARD, forward),
    };
    Some(rotation.normalize())
}

/// Rotate `from` toward `to` by at most `max_degrees`.
///
/// Lands exactly on `to` once the remaining angle fits in one step.
pub fn rotate_towards(from: Quat, to: Quat, max_degrees: f32) -> Quat {
    let angle = from.angle_between(to);
    let step = max_degrees.max(0.0).to_radians();
    if angle <= step || angle <= f32::EPSILON {
        return to;
    }
    from.slerp(to, step / angle).normalize()
}

/// New rotation for `current` after one tick of turning toward `target`.
///
/// A target at the body's own position (or straight above/below it with
/// `yaw_only`) gives no direction; the rotation is then left unchanged.
pub fn turn_toward(target: Vec3, current: &Transform, facing: Facing, dt: f32) -> Quat {
    let mut dir = target - current.position;
    if facing.yaw_only {
        dir.y = 0.0;
    }
    match look_rotation(dir, UP) {
        Some(goal) => rotate_towards(current.rotation, goal, facing.speed_deg * dt),
        None => current.rotation,
    }
}
