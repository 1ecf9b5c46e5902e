//! Session observer trait for progress reporting and data collection.

use lc_behavior::CreatureState;
use lc_core::{AgentId, SimClock, TargetId, Vec3};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait SimObserver {
    /// Called at the very start of each tick, before any agent runs.
    fn on_tick_start(&mut self, _clock: &SimClock) {}

    /// A driven agent changed state this tick.
    fn on_transition(&mut self, _agent: AgentId, _from: CreatureState, _to: CreatureState) {}

    /// A driven agent pounced this tick.
    fn on_impulse(&mut self, _agent: AgentId, _impulse: Vec3) {}

    /// An abandoned pointer returned home.
    fn on_pointer_respawn(&mut self, _pointer: TargetId) {}

    /// Called at the end of each tick.  `driven` counts the agents this
    /// participant had authority over.
    fn on_tick_end(&mut self, _clock: &SimClock, _driven: usize) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _clock: &SimClock) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
