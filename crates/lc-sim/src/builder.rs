//! Fluent builders for [`CreatureController`] and [`Sim`].

use std::collections::HashSet;

use lc_behavior::{Creature, CreatureBrain, CreatureConfig};
use lc_core::{AgentId, AgentRng, ParticipantId, SimConfig, TargetId};
use lc_perception::SpatialQuery;

use crate::{
    AuthorityGate, CreatureBody, CreatureController, LaserPointer, LoopbackChannel,
    OwnershipOracle, Sim, SimError, SimResult,
};

// ── ControllerBuilder ─────────────────────────────────────────────────────────

/// Fluent builder for [`CreatureController`].
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                       |
/// |----------------|-------------------------------|
/// | `.config(c)`   | `CreatureConfig::default()`   |
/// | `.seed(s)`     | `0`                           |
/// | `.target(t)`   | no target                     |
pub struct ControllerBuilder {
    agent:  AgentId,
    local:  ParticipantId,
    config: CreatureConfig,
    seed:   u64,
    target: Option<TargetId>,
}

impl ControllerBuilder {
    /// `local` is the participant this process runs as.
    pub fn new(agent: AgentId, local: ParticipantId) -> Self {
        Self {
            agent,
            local,
            config: CreatureConfig::default(),
            seed:   0,
            target: None,
        }
    }

    pub fn config(mut self, config: CreatureConfig) -> Self {
        self.config = config;
        self
    }

    /// Global seed; mixed with the agent id for the per-agent RNG.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn target(mut self, target: TargetId) -> Self {
        self.target = Some(target);
        self
    }

    /// Validate inputs and return a controller starting in `Idle`.
    pub fn build(self) -> SimResult<CreatureController> {
        if !self.agent.is_valid() {
            return Err(SimError::Config("controller needs a valid agent id".into()));
        }
        if !self.local.is_valid() {
            return Err(SimError::Config("controller needs a valid local participant".into()));
        }
        let brain = CreatureBrain::new(self.config)?;

        Ok(CreatureController {
            agent:       self.agent,
            gate:        AuthorityGate::new(self.local),
            brain,
            creature:    Creature::new(),
            rng:         AgentRng::new(self.seed, self.agent),
            target:      self.target,
            seq:         0,
            applied_seq: None,
            driving:     false,
        })
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

/// Fluent builder for [`Sim<Q, O, B>`].
pub struct SimBuilder<Q: SpatialQuery, O: OwnershipOracle, B: CreatureBody> {
    config:    SimConfig,
    scene:     Q,
    oracle:    O,
    local:     ParticipantId,
    creatures: Vec<(CreatureController, B)>,
    pointer:   Option<LaserPointer>,
}

impl<Q: SpatialQuery, O: OwnershipOracle, B: CreatureBody> SimBuilder<Q, O, B> {
    pub fn new(config: SimConfig, scene: Q, oracle: O, local: ParticipantId) -> Self {
        Self {
            config,
            scene,
            oracle,
            local,
            creatures: Vec::new(),
            pointer:   None,
        }
    }

    pub fn creature(mut self, controller: CreatureController, body: B) -> Self {
        self.creatures.push((controller, body));
        self
    }

    /// The pointer whose dot is the creatures' target.
    pub fn pointer(mut self, pointer: LaserPointer) -> Self {
        self.pointer = Some(pointer);
        self
    }

    pub fn build(self) -> SimResult<Sim<Q, O, B>> {
        if !(self.config.tick_delta_secs > 0.0 && self.config.tick_delta_secs.is_finite()) {
            return Err(SimError::Config(format!(
                "tick_delta_secs must be positive, got {}",
                self.config.tick_delta_secs
            )));
        }

        let mut seen = HashSet::new();
        for (controller, _) in &self.creatures {
            if !seen.insert(controller.agent()) {
                return Err(SimError::DuplicateAgent(controller.agent()));
            }
        }

        let (controllers, bodies) = self.creatures.into_iter().unzip();

        Ok(Sim {
            clock:   self.config.make_clock(),
            config:  self.config,
            scene:   self.scene,
            oracle:  self.oracle,
            channel: LoopbackChannel::new(),
            local:   self.local,
            controllers,
            bodies,
            pointer: self.pointer,
        })
    }
}
