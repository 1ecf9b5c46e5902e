//! The spatial query seam between the controller and the host's collision world.

use lc_core::Vec3;

/// First surface struck by a ray.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RayHit {
    /// World-space hit point.
    pub point: Vec3,
    /// Unit surface normal at `point`, facing the ray origin.
    pub normal: Vec3,
    /// Distance from the ray origin to `point`.
    pub distance: f32,
}

/// Ray queries against static and dynamic geometry.
///
/// Implementations must treat a non-positive `max_distance` as "nothing hit"
/// and must not report geometry the ray starts inside of.
pub trait SpatialQuery {
    /// Nearest hit along `origin + t * dir` for `t` in `[0, max_distance]`.
    ///
    /// `dir` is expected to be unit length.
    fn raycast(&self, origin: Vec3, dir: Vec3, max_distance: f32) -> Option<RayHit>;

    /// `true` if anything lies along the ray within `max_distance`.
    fn occluded(&self, origin: Vec3, dir: Vec3, max_distance: f32) -> bool {
        self.raycast(origin, dir, max_distance).is_some()
    }
}

impl<Q: SpatialQuery + ?Sized> SpatialQuery for &Q {
    fn raycast(&self, origin: Vec3, dir: Vec3, max_distance: f32) -> Option<RayHit> {
        (**self).raycast(origin, dir, max_distance)
    }
}

/// Empty world: every ray escapes.
pub struct OpenSpace;

impl SpatialQuery for OpenSpace {
    fn raycast(&self, _origin: Vec3, _dir: Vec3, _max_distance: f32) -> Option<RayHit> {
        None
    }
}
