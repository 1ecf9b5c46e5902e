//! Jump impulse policy.
//!
//! A pounce is a single impulse along the direction to the target, tilted
//! upward in proportion to the distance so far targets get a higher arc:
//!
//! ```text
//! impulse = (normalize(to - from) + UP * distance * distance_multiplier) * force
//! force   ~ U[force_min, force_max]
//! ```

use lc_core::transform::UP;
use lc_core::{AgentRng, Deadline, Vec3};

/// Endpoints of a pounce, only available while the target is visible.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Shot {
    pub from: Vec3,
    pub to:   Vec3,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ImpulsePolicy {
    pub force_min:           f32,
    pub force_max:           f32,
    pub distance_multiplier: f32,
}

impl ImpulsePolicy {
    /// Unscaled jump direction (not unit length once the upward bias is added).
    pub fn direction(&self, shot: Shot) -> Vec3 {
        let distance = shot.from.distance(shot.to);
        (shot.to - shot.from).normalize_or_zero() + UP * (distance * self.distance_multiplier)
    }

    /// Full impulse with a force drawn from `[force_min, force_max]`.
    pub fn impulse(&self, shot: Shot, rng: &mut AgentRng) -> Vec3 {
        self.direction(shot) * rng.gen_range(self.force_min..=self.force_max)
    }

    /// Cooldown-gated pounce.
    ///
    /// Does nothing until `cooldown` is due.  Once due, the cooldown is pushed
    /// by `interval` whether or not an impulse results; an impulse is only
    /// produced for a visible target (`shot` is `Some`) while `grounded`
    /// holds.  `grounded` is only probed when everything else allows a jump.
    pub fn try_fire<G>(
        &self,
        cooldown: &mut Deadline,
        interval: f32,
        now:      f32,
        shot:     Option<Shot>,
        grounded: G,
        rng:      &mut AgentRng,
    ) -> Option<Vec3>
    where
        G: FnOnce() -> bool,
    {
        if !cooldown.try_fire(now, interval) {
            return None;
        }
        let shot = shot?;
        grounded().then(|| self.impulse(shot, rng))
    }
}
