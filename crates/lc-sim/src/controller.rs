//! One creature, wired to its collaborators.

use tracing::{debug, trace};

use lc_behavior::{Creature, CreatureBrain, CreatureState, Intent, TickInput};
use lc_core::{AgentId, AgentRng, SimClock, TargetId, Transform, Vec3};
use lc_perception::SpatialQuery;

use crate::{
    AuthorityGate, CreatureBody, CreatureSnapshot, OwnershipOracle, ReplicationChannel,
    apply_intents,
};

/// Host services for one tick, shared by every controller ticked this frame.
pub struct HostContext<'a> {
    pub clock:   SimClock,
    /// Position of the target this frame, `None` when absent or switched off.
    pub target:  Option<Vec3>,
    pub query:   &'a dyn SpatialQuery,
    pub oracle:  &'a dyn OwnershipOracle,
    pub channel: &'a mut dyn ReplicationChannel,
}

/// What happened to one agent during a tick.
#[derive(Clone, Debug, PartialEq)]
pub enum TickOutcome {
    /// We are the authority and ran the brain.
    Driven(Vec<Intent>),
    /// Someone else is; `applied` tells whether a new snapshot was mirrored.
    Mirrored { applied: bool },
    /// We are the authority but the body has no usable pose this tick.
    Skipped,
}

/// A creature plus everything it needs to run: brain, RNG, authority gate
/// and replication bookkeeping.
///
/// Create via [`ControllerBuilder`][crate::ControllerBuilder].
pub struct CreatureController {
    pub(crate) agent:       AgentId,
    pub(crate) gate:        AuthorityGate,
    pub(crate) brain:       CreatureBrain,
    pub(crate) creature:    Creature,
    pub(crate) rng:         AgentRng,
    pub(crate) target:      Option<TargetId>,
    /// Last sequence number we published.
    pub(crate) seq:         u64,
    /// Last sequence number we mirrored.
    pub(crate) applied_seq: Option<u64>,
    pub(crate) driving:     bool,
}

impl CreatureController {
    #[inline]
    pub fn agent(&self) -> AgentId {
        self.agent
    }

    #[inline]
    pub fn state(&self) -> CreatureState {
        self.creature.state
    }

    pub fn creature(&self) -> &Creature {
        &self.creature
    }

    pub fn brain(&self) -> &CreatureBrain {
        &self.brain
    }

    /// Whether the last tick found us authoritative.
    pub fn is_driving(&self) -> bool {
        self.driving
    }

    pub fn target(&self) -> Option<TargetId> {
        self.target
    }

    pub fn set_target(&mut self, target: Option<TargetId>) {
        self.target = target;
    }

    /// Run one tick for this agent.
    pub fn tick<B: CreatureBody + ?Sized>(&mut self, ctx: &mut HostContext<'_>, body: &mut B) -> TickOutcome {
        let authority = self.gate.is_authority(self.agent, ctx.oracle);
        if authority != self.driving {
            debug!(agent = %self.agent, authority, state = %self.creature.state, "authority changed");
            self.driving = authority;
        }

        if !authority {
            let applied = self.mirror(&*ctx.channel);
            if !applied {
                trace!(agent = %self.agent, "no new snapshot");
            }
            return TickOutcome::Mirrored { applied };
        }

        let Some(transform) = body.transform().filter(Transform::is_valid) else {
            trace!(agent = %self.agent, "body has no valid transform, skipping tick");
            return TickOutcome::Skipped;
        };

        let input = TickInput { agent: self.agent, clock: ctx.clock, transform, target: ctx.target };
        let intents = self.brain.tick(&mut self.creature, &input, ctx.query, &mut self.rng);
        apply_intents(body, &intents);
        self.publish(&mut *ctx.channel);

        TickOutcome::Driven(intents)
    }

    fn publish(&mut self, channel: &mut dyn ReplicationChannel) {
        // Continue after the newest snapshot on the channel, whoever published
        // it, so a fresh authority outranks its predecessor from the start.
        let newest = channel.latest(self.agent).map_or(0, |snap| snap.seq);
        self.seq = self.seq.max(self.applied_seq.unwrap_or(0)).max(newest) + 1;
        channel.publish(self.agent, CreatureSnapshot {
            seq:         self.seq,
            state:       self.creature.state,
            look_target: self.creature.look_target,
            target:      self.target,
        });
    }

    /// Adopt the newest snapshot if we have not applied it yet.  Timers are
    /// left alone so a later authority handoff resumes from them as-is.
    fn mirror(&mut self, channel: &dyn ReplicationChannel) -> bool {
        match channel.latest(self.agent) {
            Some(snap) if self.applied_seq.is_none_or(|seen| snap.seq > seen) && snap.seq > self.seq => {
                self.creature.state = snap.state;
                self.creature.look_target = snap.look_target;
                self.target = snap.target;
                self.applied_seq = Some(snap.seq);
                true
            }
            _ => false,
        }
    }
}
