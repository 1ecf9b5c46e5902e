//! Unit tests for lc-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, ParticipantId, TargetId};

    #[test]
    fn default_is_invalid() {
        assert_eq!(ParticipantId::default(), ParticipantId::INVALID);
        assert!(!ParticipantId::default().is_valid());
        assert!(ParticipantId(0).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(TargetId(0).to_string(), "TargetId(0)");
    }
}

#[cfg(test)]
mod transform {
    use crate::transform::{FORWARD, UP};
    use crate::{Quat, Transform, Vec3};

    #[test]
    fn identity_faces_plus_z() {
        let t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.forward(), FORWARD);
    }

    #[test]
    fn yaw_turns_forward() {
        let t = Transform::new(Vec3::ZERO, Quat::from_axis_angle(UP, std::f32::consts::FRAC_PI_2));
        let f = t.forward();
        assert!((f - Vec3::X).length() < 1e-5, "got {f}");
    }

    #[test]
    fn nan_position_is_invalid() {
        let t = Transform::from_position(Vec3::new(f32::NAN, 0.0, 0.0));
        assert!(!t.is_valid());
        assert!(Transform::default().is_valid());
    }
}

#[cfg(test)]
mod time {
    use crate::{Deadline, SimClock, SimConfig, Tick};

    #[test]
    fn clock_advances() {
        let mut clock = SimClock::new(0.5);
        clock.advance();
        clock.advance();
        assert_eq!(clock.tick, Tick(2));
        assert!((clock.now - 1.0).abs() < 1e-6);
        assert_eq!(clock.to_string(), "T2 (1.000s)");
    }

    #[test]
    fn fresh_deadline_is_due_immediately() {
        assert!(Deadline::default().is_due(0.0));
    }

    #[test]
    fn deadline_due_at_exact_time() {
        let mut d = Deadline::default();
        d.reset(1.0, 2.0);
        assert!(!d.is_due(2.999));
        assert!(d.is_due(3.0));
    }

    #[test]
    fn try_fire_pushes_forward() {
        let mut d = Deadline::default();
        assert!(d.try_fire(0.0, 0.5));
        assert!(!d.try_fire(0.4, 0.5));
        assert!(d.try_fire(0.5, 0.5));
        assert_eq!(d, Deadline(1.0));
    }

    #[test]
    fn sim_config_end_tick() {
        let cfg = SimConfig { tick_delta_secs: 0.02, total_ticks: 500, seed: 1 };
        assert_eq!(cfg.end_tick(), Tick(500));
        assert_eq!(cfg.make_clock().delta, 0.02);
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: f32 = r1.gen_range(0.0..10.0);
            let b: f32 = r2.gen_range(0.0..10.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a = r0.horizontal_direction();
        let b = r1.horizontal_direction();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn unit_circle_samples_inside() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            assert!(rng.inside_unit_circle().length() <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn horizontal_direction_is_flat_unit() {
        let mut rng = AgentRng::new(9, AgentId(3));
        for _ in 0..1000 {
            let d = rng.horizontal_direction();
            assert_eq!(d.y, 0.0);
            assert!((d.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn force_range_is_inclusive() {
        let mut rng = AgentRng::new(3, AgentId(1));
        for _ in 0..1000 {
            let f: f32 = rng.gen_range(2.0..=10.0);
            assert!((2.0..=10.0).contains(&f));
        }
    }
}
