//! Tuning knobs for one creature.
//!
//! Typically deserialized by the application (with the `serde` feature) and
//! validated once at construction; a `CreatureBrain` never holds an
//! unvalidated config.

use lc_perception::{GROUND_PROBE_DISTANCE, ViewCone};

use crate::{BehaviorError, BehaviorResult, ImpulsePolicy};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CreatureConfig {
    /// Seconds between regular transition-table evaluations.
    pub state_refresh_interval: f32,
    /// Minimum seconds between two pounces.
    pub jump_interval: f32,
    /// Seconds between random look retargets while idle or scanning.
    pub look_interval: f32,

    /// Full field of view in degrees, `[0, 180]`.
    pub fov_degrees: f32,
    /// Sight distance in metres, `[0, 1000]`.
    pub view_range: f32,

    /// Pounce force bounds, each in `[0, 10]`, `min <= max`.
    pub jump_force_min: f32,
    pub jump_force_max: f32,
    /// Upward bias per metre of distance to the target.
    pub jump_distance_multiplier: f32,

    /// Idle turn rate, degrees per second.
    pub idle_turn_speed: f32,
    /// Alert and Jump turn rate, degrees per second.
    pub alert_turn_speed: f32,

    /// Downward probe length for the ground check.
    pub ground_probe_distance: f32,
}

impl Default for CreatureConfig {
    fn default() -> Self {
        Self {
            state_refresh_interval:   3.0,
            jump_interval:            0.5,
            look_interval:            1.0,
            fov_degrees:              120.0,
            view_range:               20.0,
            jump_force_min:           2.0,
            jump_force_max:           10.0,
            jump_distance_multiplier: 0.05,
            idle_turn_speed:          50.0,
            alert_turn_speed:         300.0,
            ground_probe_distance:    GROUND_PROBE_DISTANCE,
        }
    }
}

impl CreatureConfig {
    pub fn validate(&self) -> BehaviorResult<()> {
        in_range("fov_degrees", self.fov_degrees, 0.0, 180.0)?;
        in_range("view_range", self.view_range, 0.0, 1000.0)?;
        in_range("jump_force_min", self.jump_force_min, 0.0, 10.0)?;
        in_range("jump_force_max", self.jump_force_max, 0.0, 10.0)?;
        if self.jump_force_min > self.jump_force_max {
            return Err(BehaviorError::Config(format!(
                "jump_force_min ({}) exceeds jump_force_max ({})",
                self.jump_force_min, self.jump_force_max,
            )));
        }
        in_range("jump_distance_multiplier", self.jump_distance_multiplier, 0.0, f32::MAX)?;

        positive("state_refresh_interval", self.state_refresh_interval)?;
        positive("jump_interval", self.jump_interval)?;
        positive("look_interval", self.look_interval)?;
        positive("idle_turn_speed", self.idle_turn_speed)?;
        positive("alert_turn_speed", self.alert_turn_speed)?;
        positive("ground_probe_distance", self.ground_probe_distance)?;
        Ok(())
    }

    #[inline]
    pub fn view_cone(&self) -> ViewCone {
        ViewCone::new(self.fov_degrees, self.view_range)
    }

    #[inline]
    pub fn impulse_policy(&self) -> ImpulsePolicy {
        ImpulsePolicy {
            force_min:           self.jump_force_min,
            force_max:           self.jump_force_max,
            distance_multiplier: self.jump_distance_multiplier,
        }
    }
}

fn in_range(field: &'static str, value: f32, min: f32, max: f32) -> BehaviorResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(BehaviorError::OutOfRange { field, value, min, max })
    }
}

fn positive(field: &'static str, value: f32) -> BehaviorResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(BehaviorError::NonPositive { field, value })
    }
}
