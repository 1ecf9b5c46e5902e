//! Line-of-sight test between an agent and a target point.
//!
//! # Field-of-view remap
//!
//! The cone test compares `dot(forward, dir)` against a threshold obtained by
//! *linearly* remapping the field of view from `[0, 180]` degrees onto
//! `[1, 0]`:
//!
//! ```text
//! threshold = 1 - clamp(fov, 0, 180) / 180
//! ```
//!
//! This is not `cos(fov / 2)`.  Tuned FOV values (e.g. 120°, which yields a
//! threshold of 1/3 ≈ 70.5° half-angle rather than 60°) assume this exact
//! curve, so it is kept as is.

use lc_core::Vec3;

use crate::SpatialQuery;

/// The occlusion probe stops this far short of the agent so the agent's own
/// collider is not reported as a blocker.
pub const OCCLUSION_MARGIN: f32 = 0.5;

/// How far and how wide an agent can see.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewCone {
    /// Full cone angle in degrees, meaningful in `[0, 180]`.
    pub fov_degrees: f32,
    /// Maximum straight-line sight distance.
    pub range: f32,
}

impl ViewCone {
    pub fn new(fov_degrees: f32, range: f32) -> Self {
        Self { fov_degrees, range }
    }

    #[inline]
    pub fn dot_threshold(&self) -> f32 {
        fov_dot_threshold(self.fov_degrees)
    }
}

/// Linear FOV → dot-product threshold remap (see module docs).
#[inline]
pub fn fov_dot_threshold(fov_degrees: f32) -> f32 {
    1.0 - fov_degrees.clamp(0.0, 180.0) / 180.0
}

/// `true` if `to` is inside the view cone of an agent at `from` facing
/// `forward` (unit length) and nothing in `query` blocks the view.
///
/// The occlusion probe is cast from the target back toward the agent.
pub fn can_see<Q: SpatialQuery + ?Sized>(
    from:    Vec3,
    forward: Vec3,
    to:      Vec3,
    cone:    ViewCone,
    query:   &Q,
) -> bool {
    let dir = (to - from).normalize_or_zero();

    if forward.dot(dir) < cone.dot_threshold() {
        return false;
    }

    let dist = from.distance(to);
    if dist > cone.range {
        return false;
    }

    !query.occluded(to, -dir, dist - OCCLUSION_MARGIN)
}
