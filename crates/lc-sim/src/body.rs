//! The host-side physical body of a creature.

use lc_behavior::{CreatureState, Intent};
use lc_core::{Quat, Transform, Vec3};

/// What the controller needs from the host's rigid body.
pub trait CreatureBody {
    /// Current pose, `None` when the body is gone or not yet spawned.
    fn transform(&self) -> Option<Transform>;

    fn set_rotation(&mut self, rotation: Quat);

    /// Freeze (or release) physics-driven rotation.
    fn set_rotation_locked(&mut self, locked: bool);

    fn apply_impulse(&mut self, impulse: Vec3);

    /// Entry action hook (sound, particles).  Default: nothing.
    fn on_state_enter(&mut self, _state: CreatureState) {}

    /// Exit action hook.  Default: nothing.
    fn on_state_exit(&mut self, _state: CreatureState) {}
}

/// Apply a tick's intents to `body` in order.
pub fn apply_intents<B: CreatureBody + ?Sized>(body: &mut B, intents: &[Intent]) {
    for intent in intents {
        match *intent {
            Intent::Face { rotation, lock_upright } => {
                body.set_rotation_locked(lock_upright);
                body.set_rotation(rotation);
            }
            Intent::ApplyImpulse(impulse) => body.apply_impulse(impulse),
            Intent::ExitState(state) => body.on_state_exit(state),
            Intent::EnterState(state) => body.on_state_enter(state),
        }
    }
}

/// Record-only body for headless sessions and tests.
///
/// Rotation is applied directly; impulses are accumulated, not integrated.
#[derive(Clone, Debug, Default)]
pub struct KinematicBody {
    pub transform:       Transform,
    /// `false` simulates a despawned body.
    pub alive:           bool,
    pub rotation_locked: bool,
    pub impulses:        Vec<Vec3>,
    pub entered:         Vec<CreatureState>,
}

impl KinematicBody {
    pub fn at(position: Vec3) -> Self {
        Self {
            transform: Transform::from_position(position),
            alive: true,
            ..Default::default()
        }
    }
}

impl CreatureBody for KinematicBody {
    fn transform(&self) -> Option<Transform> {
        self.alive.then_some(self.transform)
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.transform.rotation = rotation;
    }

    fn set_rotation_locked(&mut self, locked: bool) {
        self.rotation_locked = locked;
    }

    fn apply_impulse(&mut self, impulse: Vec3) {
        self.impulses.push(impulse);
    }

    fn on_state_enter(&mut self, state: CreatureState) {
        self.entered.push(state);
    }
}
