//! Per-agent creature state and the brain that advances it.

use tracing::{debug, trace};

use lc_core::{AgentId, AgentRng, Deadline, SimClock, Transform, Vec3};
use lc_orientation::{Facing, turn_toward};
use lc_perception::{SpatialQuery, can_see, is_grounded};

use crate::{BehaviorResult, CreatureConfig, CreatureState, ImpulsePolicy, Intent, Shot, transition};

// ── Per-agent state ───────────────────────────────────────────────────────────

/// The three independent deadlines a creature runs on.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timers {
    /// Next regular transition-table evaluation.
    pub refresh: Deadline,
    /// Next random look retarget.
    pub look: Deadline,
    /// Next allowed pounce.
    pub jump: Deadline,
}

/// Mutable state of one creature.  Owned by whoever owns the agent; the
/// brain only borrows it for the duration of a tick.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Creature {
    pub state: CreatureState,
    /// Point the creature is turning toward.
    pub look_target: Vec3,
    pub timers: Timers,
}

impl Creature {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Host inputs for one tick.
#[derive(Copy, Clone, Debug)]
pub struct TickInput {
    pub agent:     AgentId,
    pub clock:     SimClock,
    /// Body pose read from the host this tick.
    pub transform: Transform,
    /// Target position, `None` when absent or switched off.
    pub target:    Option<Vec3>,
}

// ── CreatureBrain ─────────────────────────────────────────────────────────────

/// Stateless per-tick logic shared by every creature with the same tuning.
#[derive(Clone, Debug)]
pub struct CreatureBrain {
    config: CreatureConfig,
    policy: ImpulsePolicy,
}

impl CreatureBrain {
    /// Validate `config` and build a brain.  Invalid tuning is rejected here
    /// rather than surfacing mid-session.
    pub fn new(config: CreatureConfig) -> BehaviorResult<Self> {
        config.validate()?;
        let policy = config.impulse_policy();
        Ok(Self { config, policy })
    }

    pub fn config(&self) -> &CreatureConfig {
        &self.config
    }

    /// Visibility of `target` from `transform`, recomputed on every call.
    pub fn sees<Q: SpatialQuery + ?Sized>(
        &self,
        transform: &Transform,
        target:    Option<Vec3>,
        query:     &Q,
    ) -> bool {
        target.is_some_and(|t| {
            can_see(transform.position, transform.forward(), t, self.config.view_cone(), query)
        })
    }

    /// Advance `creature` by one tick and return the intents to apply.
    pub fn tick<Q: SpatialQuery + ?Sized>(
        &self,
        creature: &mut Creature,
        input:    &TickInput,
        query:    &Q,
        rng:      &mut AgentRng,
    ) -> Vec<Intent> {
        let now = input.clock.now;
        let visible = self.sees(&input.transform, input.target, query);
        let mut intents = Vec::with_capacity(4);

        match creature.state {
            CreatureState::Idle => {
                self.wander(creature, &input.transform, now, rng);
                intents.push(self.face(creature, input, Facing::yaw(self.config.idle_turn_speed)));
            }
            CreatureState::Alert => {
                match input.target.filter(|_| visible) {
                    Some(target) => creature.look_target = target,
                    None => self.wander(creature, &input.transform, now, rng),
                }
                intents.push(self.face(creature, input, Facing::yaw(self.config.alert_turn_speed)));
            }
            CreatureState::Jump => {
                let position = input.transform.position;
                let shot = input
                    .target
                    .filter(|_| visible)
                    .map(|to| Shot { from: position, to });
                let impulse = self.policy.try_fire(
                    &mut creature.timers.jump,
                    self.config.jump_interval,
                    now,
                    shot,
                    || is_grounded(position, self.config.ground_probe_distance, query),
                    rng,
                );
                if let Some(impulse) = impulse {
                    debug!(agent = %input.agent, ?impulse, "pounce");
                    intents.push(Intent::ApplyImpulse(impulse));
                }

                if let Some(target) = input.target {
                    creature.look_target = target;
                }
                intents.push(self.face(creature, input, Facing::free(self.config.alert_turn_speed)));
            }
        }

        let spotted = creature.state == CreatureState::Idle && visible;
        if creature.timers.refresh.is_due(now) || spotted {
            let t = transition(creature.state, visible);
            creature.timers.refresh.reset(now, self.config.state_refresh_interval);
            if t.changed() {
                debug!(agent = %input.agent, from = %t.from, to = %t.to, visible, "state change");
                creature.state = t.to;
                intents.extend(t.effects);
            } else {
                trace!(agent = %input.agent, state = %t.from, "state refreshed");
            }
        }

        intents
    }

    /// Retarget to a random horizontal heading when the look deadline is due.
    fn wander(&self, creature: &mut Creature, transform: &Transform, now: f32, rng: &mut AgentRng) {
        if creature.timers.look.try_fire(now, self.config.look_interval) {
            creature.look_target = transform.position + rng.horizontal_direction();
        }
    }

    fn face(&self, creature: &Creature, input: &TickInput, facing: Facing) -> Intent {
        Intent::Face {
            rotation:     turn_toward(creature.look_target, &input.transform, facing, input.clock.delta),
            lock_upright: facing.yaw_only,
        }
    }
}
