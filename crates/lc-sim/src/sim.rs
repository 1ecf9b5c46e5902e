//! The `Sim` struct and its tick loop.

use lc_behavior::Intent;
use lc_core::{AgentId, LcError, ParticipantId, SimClock, SimConfig};
use lc_perception::SpatialQuery;

use crate::{
    CreatureBody, CreatureController, HostContext, LaserPointer, LoopbackChannel, OwnershipOracle,
    SimObserver, SimResult, TickOutcome,
};

/// A headless session: one participant's view of a set of creatures sharing
/// a scene and (optionally) a laser pointer.
///
/// Each tick:
///
/// 1. **Pointer**: respawn it if abandoned long enough and recast the beam.
///    The dot (while the beam is on) is the target of every creature whose
///    target id is the pointer's; the rest see no target.
/// 2. **Agents**: tick every controller in registration order.  Agents we
///    are not the authority for mirror the loopback channel instead.
/// 3. **Report**: transitions and impulses go to the observer.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<Q: SpatialQuery, O: OwnershipOracle, B: CreatureBody> {
    pub config: SimConfig,
    pub clock:  SimClock,
    /// Collision world used for perception, ground probes and the beam.
    pub scene:  Q,
    pub oracle: O,
    pub channel: LoopbackChannel,
    /// The participant this session runs as.
    pub local:  ParticipantId,

    /// Parallel to `bodies`: `controllers[i]` drives `bodies[i]`.
    pub controllers: Vec<CreatureController>,
    pub bodies:      Vec<B>,

    pub pointer: Option<LaserPointer>,
}

impl<Q: SpatialQuery, O: OwnershipOracle, B: CreatureBody> Sim<Q, O, B> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    pub fn run<Obs: SimObserver>(&mut self, observer: &mut Obs) {
        while self.clock.tick < self.config.end_tick() {
            self.step(observer);
        }
        observer.on_sim_end(&self.clock);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<Obs: SimObserver>(&mut self, n: u64, observer: &mut Obs) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    pub fn controller(&self, agent: AgentId) -> SimResult<&CreatureController> {
        let i = self.position(agent)?;
        Ok(&self.controllers[i])
    }

    pub fn body(&self, agent: AgentId) -> SimResult<&B> {
        let i = self.position(agent)?;
        Ok(&self.bodies[i])
    }

    pub fn body_mut(&mut self, agent: AgentId) -> SimResult<&mut B> {
        let i = self.position(agent)?;
        Ok(&mut self.bodies[i])
    }

    /// `participant` grabs the pointer, taking authority over its dot and
    /// linked creatures.  No-op without a pointer.
    pub fn pick_up_pointer(&mut self, participant: ParticipantId) {
        if let Some(pointer) = self.pointer.as_mut() {
            pointer.pick_up(participant, &mut self.oracle);
        }
    }

    pub fn drop_pointer(&mut self) {
        let now = self.clock.now;
        if let Some(pointer) = self.pointer.as_mut() {
            pointer.drop_at(now, self.local);
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Process one tick and advance the clock.  Returns how many agents
    /// this participant drove.
    pub fn step<Obs: SimObserver>(&mut self, observer: &mut Obs) -> usize {
        observer.on_tick_start(&self.clock);

        // (pointer id, dot position if the beam is on)
        let dot = self.pointer.as_mut().map(|pointer| {
            if pointer.should_respawn(self.clock.now) {
                pointer.respawn();
                observer.on_pointer_respawn(pointer.id());
            }
            pointer.update_dot(&self.scene);
            (pointer.id(), pointer.target())
        });

        let mut ctx = HostContext {
            clock:   self.clock,
            target:  None,
            query:   &self.scene,
            oracle:  &self.oracle,
            channel: &mut self.channel,
        };

        let mut driven = 0;
        for (controller, body) in self.controllers.iter_mut().zip(self.bodies.iter_mut()) {
            // A creature only perceives the dot it is interested in.
            ctx.target = match (controller.target(), dot) {
                (Some(wanted), Some((id, position))) if wanted == id => position,
                _ => None,
            };
            if let TickOutcome::Driven(intents) = controller.tick(&mut ctx, body) {
                driven += 1;
                report(controller.agent(), &intents, observer);
            }
        }

        observer.on_tick_end(&self.clock, driven);
        self.clock.advance();
        driven
    }

    fn position(&self, agent: AgentId) -> SimResult<usize> {
        self.controllers
            .iter()
            .position(|c| c.agent() == agent)
            .ok_or_else(|| LcError::AgentNotFound(agent).into())
    }
}

/// Forward a driven agent's transitions and impulses to the observer.
fn report<Obs: SimObserver>(agent: AgentId, intents: &[Intent], observer: &mut Obs) {
    let mut exited = None;
    for intent in intents {
        match *intent {
            Intent::ExitState(from) => exited = Some(from),
            Intent::EnterState(to) => {
                if let Some(from) = exited.take() {
                    observer.on_transition(agent, from, to);
                }
            }
            Intent::ApplyImpulse(impulse) => observer.on_impulse(agent, impulse),
            Intent::Face { .. } => {}
        }
    }
}

