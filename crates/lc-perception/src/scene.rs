//! A minimal static collision world: an optional ground plane plus boxes.
//!
//! # Spatial index
//!
//! Boxes live in an R-tree (via `rstar`) keyed by their 3-D envelope.  A ray
//! query first collects the boxes whose envelope intersects the ray's own
//! bounding box, then runs an exact slab test on those candidates only.

use rstar::{RTree, RTreeObject, AABB};

use lc_core::Vec3;

use crate::{RayHit, SpatialQuery};

/// Axis-aligned box obstacle.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Box spanning the two corners (in any order).
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        Self { min: a.min(b), max: a.max(b) }
    }

    /// Box centred on `center` with the given half extents.
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self::from_corners(center - half_extents, center + half_extents)
    }

    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Slab test.  Returns the entry distance and the entry face normal.
    ///
    /// Rays starting inside the box report no hit.
    fn intersect(&self, origin: Vec3, dir: Vec3, max_distance: f32) -> Option<(f32, Vec3)> {
        if self.contains(origin) {
            return None;
        }

        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;
        let mut normal = Vec3::ZERO;

        for axis in 0..3 {
            let o = origin[axis];
            let d = dir[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);

            if d.abs() < f32::EPSILON {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / d;
            let (t0, t1) = {
                let a = (lo - o) * inv;
                let b = (hi - o) * inv;
                if a <= b { (a, b) } else { (b, a) }
            };
            if t0 > t_enter {
                t_enter = t0;
                normal = Vec3::ZERO;
                normal[axis] = -d.signum();
            }
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return None;
            }
        }

        (t_enter >= 0.0 && t_enter <= max_distance).then_some((t_enter, normal))
    }
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct BoxEntry {
    aabb: Aabb,
}

impl RTreeObject for BoxEntry {
    type Envelope = AABB<[f32; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.aabb.min.to_array(), self.aabb.max.to_array())
    }
}

// ── StaticScene ───────────────────────────────────────────────────────────────

/// Headless implementation of [`SpatialQuery`].
#[derive(Default)]
pub struct StaticScene {
    /// Height of the infinite horizontal ground plane, if any.
    ground: Option<f32>,
    boxes: RTree<BoxEntry>,
}

impl StaticScene {
    /// An empty scene (no ground, no boxes).
    pub fn new() -> Self {
        Self::default()
    }

    /// A scene with a ground plane at height `y` and the given boxes.
    pub fn with_ground(y: f32, boxes: impl IntoIterator<Item = Aabb>) -> Self {
        let entries = boxes.into_iter().map(|aabb| BoxEntry { aabb }).collect();
        Self { ground: Some(y), boxes: RTree::bulk_load(entries) }
    }

    pub fn insert_box(&mut self, aabb: Aabb) {
        self.boxes.insert(BoxEntry { aabb });
    }

    pub fn set_ground(&mut self, y: Option<f32>) {
        self.ground = y;
    }

    pub fn box_count(&self) -> usize {
        self.boxes.size()
    }

    fn ground_hit(&self, origin: Vec3, dir: Vec3, max_distance: f32) -> Option<RayHit> {
        let y = self.ground?;
        if dir.y.abs() < f32::EPSILON {
            return None;
        }
        let t = (y - origin.y) / dir.y;
        if !(0.0..=max_distance).contains(&t) {
            return None;
        }
        let normal = if origin.y >= y { Vec3::Y } else { Vec3::NEG_Y };
        Some(RayHit { point: origin + dir * t, normal, distance: t })
    }
}

impl SpatialQuery for StaticScene {
    fn raycast(&self, origin: Vec3, dir: Vec3, max_distance: f32) -> Option<RayHit> {
        if max_distance <= 0.0 {
            return None;
        }

        let end = origin + dir * max_distance;
        let sweep = AABB::from_corners(origin.to_array(), end.to_array());

        let box_hit = self
            .boxes
            .locate_in_envelope_intersecting(&sweep)
            .filter_map(|entry| entry.aabb.intersect(origin, dir, max_distance))
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(t, normal)| RayHit { point: origin + dir * t, normal, distance: t });

        match (box_hit, self.ground_hit(origin, dir, max_distance)) {
            (Some(a), Some(b)) => Some(if a.distance <= b.distance { a } else { b }),
            (a, b) => a.or(b),
        }
    }
}
