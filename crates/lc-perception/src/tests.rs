//! Unit tests for lc-perception.

use lc_core::Vec3;

use crate::{Aabb, StaticScene};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Ground at y = 0 and a 1 m wall centred at z = 5 (spanning x ∈ [-2, 2]).
fn walled_scene() -> StaticScene {
    StaticScene::with_ground(
        0.0,
        [Aabb::from_center(Vec3::new(0.0, 1.0, 5.0), Vec3::new(2.0, 1.0, 0.5))],
    )
}

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

// ── Vision ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod vision_tests {
    use lc_core::Vec3;

    use super::*;
    use crate::{OpenSpace, ViewCone, can_see, fov_dot_threshold};

    #[test]
    fn threshold_is_linear_remap() {
        assert_eq!(fov_dot_threshold(0.0), 1.0);
        assert_eq!(fov_dot_threshold(90.0), 0.5);
        assert_eq!(fov_dot_threshold(180.0), 0.0);
        assert!((fov_dot_threshold(120.0) - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn threshold_clamps_out_of_range_fov() {
        assert_eq!(fov_dot_threshold(-30.0), 1.0);
        assert_eq!(fov_dot_threshold(400.0), 0.0);
    }

    #[test]
    fn on_axis_target_visible_for_every_fov() {
        for fov in 0..=180 {
            let cone = ViewCone::new(fov as f32, 20.0);
            assert!(
                can_see(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), cone, &OpenSpace),
                "fov {fov}"
            );
        }
    }

    #[test]
    fn target_behind_never_visible() {
        for fov in 0..=180 {
            let cone = ViewCone::new(fov as f32, 20.0);
            assert!(
                !can_see(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), cone, &OpenSpace),
                "fov {fov}"
            );
        }
    }

    #[test]
    fn beyond_range_never_visible() {
        for fov in [0.0, 45.0, 120.0, 180.0] {
            let cone = ViewCone::new(fov, 20.0);
            assert!(!can_see(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 20.5), cone, &OpenSpace));
        }
        let cone = ViewCone::new(120.0, 20.0);
        assert!(can_see(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 20.0), cone, &OpenSpace));
    }

    #[test]
    fn wide_fov_accepts_angles_a_cosine_cone_would_reject() {
        // 65° off-axis: cos(65°) ≈ 0.42 > 1/3, but outside a true 60° half-angle.
        let angle = 65f32.to_radians();
        let target = Vec3::new(angle.sin(), 0.0, angle.cos()) * 5.0;
        let cone = ViewCone::new(120.0, 20.0);
        assert!(can_see(Vec3::ZERO, Vec3::Z, target, cone, &OpenSpace));
        assert!(angle.cos() < (60f32).to_radians().cos());
    }

    #[test]
    fn wall_blocks_sight() {
        let scene = walled_scene();
        let cone = ViewCone::new(120.0, 20.0);
        let eye = Vec3::new(0.0, 1.0, 0.0);
        assert!(!can_see(eye, Vec3::Z, Vec3::new(0.0, 1.0, 10.0), cone, &scene));
        // In front of the wall.
        assert!(can_see(eye, Vec3::Z, Vec3::new(0.0, 1.0, 3.0), cone, &scene));
    }

    #[test]
    fn geometry_hugging_the_agent_is_ignored() {
        // A small box around the agent itself (its own collider).
        let scene = StaticScene::with_ground(
            -10.0,
            [Aabb::from_center(Vec3::ZERO, Vec3::splat(0.3))],
        );
        let cone = ViewCone::new(120.0, 20.0);
        assert!(can_see(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 4.0), cone, &scene));
    }

    #[test]
    fn dot_lying_on_the_floor_is_visible() {
        let scene = walled_scene();
        let cone = ViewCone::new(120.0, 20.0);
        let cat = Vec3::new(0.0, 0.25, 0.0);
        let dot = Vec3::new(0.5, 0.01, 2.0);
        assert!(can_see(cat, Vec3::Z, dot, cone, &scene));
    }
}

// ── Ground probe ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod ground_tests {
    use lc_core::Vec3;

    use super::*;
    use crate::{GROUND_PROBE_DISTANCE, OpenSpace, is_grounded};

    #[test]
    fn standing_on_floor() {
        let scene = walled_scene();
        assert!(is_grounded(Vec3::new(0.0, 0.25, 0.0), GROUND_PROBE_DISTANCE, &scene));
    }

    #[test]
    fn airborne() {
        let scene = walled_scene();
        assert!(!is_grounded(Vec3::new(0.0, 2.0, 0.0), GROUND_PROBE_DISTANCE, &scene));
    }

    #[test]
    fn standing_on_box_top() {
        let scene = walled_scene();
        assert!(is_grounded(Vec3::new(0.0, 2.3, 5.0), GROUND_PROBE_DISTANCE, &scene));
    }

    #[test]
    fn open_space_is_never_ground() {
        assert!(!is_grounded(Vec3::ZERO, 100.0, &OpenSpace));
    }
}

// ── StaticScene ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod scene_tests {
    use lc_core::Vec3;

    use super::*;
    use crate::SpatialQuery;

    #[test]
    fn ray_hits_box_face() {
        let scene = walled_scene();
        let hit = scene.raycast(Vec3::new(0.0, 1.0, 0.0), Vec3::Z, 100.0).unwrap();
        assert!((hit.distance - 4.5).abs() < 1e-4);
        assert!(approx(hit.point, Vec3::new(0.0, 1.0, 4.5)));
        assert!(approx(hit.normal, Vec3::NEG_Z));
    }

    #[test]
    fn ray_stops_short_of_box() {
        let scene = walled_scene();
        assert!(scene.raycast(Vec3::new(0.0, 1.0, 0.0), Vec3::Z, 4.0).is_none());
    }

    #[test]
    fn ray_from_inside_box_misses_it() {
        let scene = StaticScene::with_ground(
            -100.0,
            [Aabb::from_center(Vec3::ZERO, Vec3::splat(1.0))],
        );
        assert!(scene.raycast(Vec3::ZERO, Vec3::X, 10.0).is_none());
    }

    #[test]
    fn nearest_surface_wins() {
        let scene = walled_scene();
        let dir = Vec3::new(0.0, -1.0, 1.0).normalize();
        // From (0, 3, 0) heading down-forward: floor at t ≈ 4.24, wall top at y=2 → z=1 (not inside wall x-z span).
        let hit = scene.raycast(Vec3::new(0.0, 3.0, 0.0), dir, 100.0).unwrap();
        assert!(approx(hit.normal, Vec3::Y));
        assert!(approx(hit.point, Vec3::new(0.0, 0.0, 3.0)));
    }

    #[test]
    fn non_positive_length_never_hits() {
        let scene = walled_scene();
        assert!(scene.raycast(Vec3::new(0.0, 1.0, 4.4), Vec3::Z, 0.0).is_none());
        assert!(scene.raycast(Vec3::new(0.0, 1.0, 4.4), Vec3::Z, -1.0).is_none());
    }

    #[test]
    fn inserted_boxes_are_queried() {
        let mut scene = StaticScene::new();
        assert!(scene.raycast(Vec3::ZERO, Vec3::X, 10.0).is_none());
        scene.insert_box(Aabb::from_center(Vec3::new(5.0, 0.0, 0.0), Vec3::splat(0.5)));
        assert_eq!(scene.box_count(), 1);
        let hit = scene.raycast(Vec3::ZERO, Vec3::X, 10.0).unwrap();
        assert!((hit.distance - 4.5).abs() < 1e-4);
    }

    #[test]
    fn ceiling_hit_from_below_faces_down() {
        let mut scene = StaticScene::new();
        scene.set_ground(Some(3.0));
        let hit = scene.raycast(Vec3::ZERO, Vec3::Y, 10.0).unwrap();
        assert!(approx(hit.normal, Vec3::NEG_Y));
    }
}
