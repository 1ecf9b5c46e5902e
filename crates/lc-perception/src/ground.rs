//! Ground-contact probe.

use lc_core::Vec3;

use crate::SpatialQuery;

/// Default probe length below the body centre.
pub const GROUND_PROBE_DISTANCE: f32 = 0.5;

/// `true` if a straight-down ray from `position` hits geometry within
/// `probe_distance`.
#[inline]
pub fn is_grounded<Q: SpatialQuery + ?Sized>(position: Vec3, probe_distance: f32, query: &Q) -> bool {
    query.occluded(position, Vec3::NEG_Y, probe_distance)
}
