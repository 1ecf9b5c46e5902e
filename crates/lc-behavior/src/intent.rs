//! Intents: what the brain asks the host to do after a tick.

use lc_core::{Quat, Vec3};

use crate::CreatureState;

/// An action the creature wants applied to its body or presentation.
///
/// Produced by [`CreatureBrain::tick`][crate::CreatureBrain::tick] in the
/// order they should be applied.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Intent {
    /// Set the body's rotation.
    ///
    /// With `lock_upright` the host should freeze physics-driven rotation so
    /// a tumbled body can get back up; without it rotation stays free.
    Face {
        rotation:     Quat,
        lock_upright: bool,
    },

    /// Add an instantaneous impulse to the body.
    ApplyImpulse(Vec3),

    /// Exit action of the state being left.
    ExitState(CreatureState),

    /// Entry action of the state being entered (sound, particles, …).
    EnterState(CreatureState),
}

impl Intent {
    #[inline]
    pub fn is_impulse(&self) -> bool {
        matches!(self, Intent::ApplyImpulse(_))
    }
}
