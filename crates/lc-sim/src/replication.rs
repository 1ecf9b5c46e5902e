//! State broadcast from the authority to everyone else.
//!
//! The authority publishes a snapshot after every driven tick.  Observers
//! apply a snapshot only if its sequence number is newer than the last one
//! they applied, so re-reading the same snapshot is a no-op.

use std::collections::HashMap;

use lc_behavior::CreatureState;
use lc_core::{AgentId, TargetId, Vec3};

/// Replicated view of a creature.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureSnapshot {
    /// Monotonic per-agent counter assigned by the publisher.
    pub seq:         u64,
    pub state:       CreatureState,
    pub look_target: Vec3,
    /// The object the creature is interested in.
    pub target:      Option<TargetId>,
}

/// Transport for creature snapshots.  The host owns serialization.
pub trait ReplicationChannel {
    fn publish(&mut self, agent: AgentId, snapshot: CreatureSnapshot);

    /// Newest snapshot received for `agent`.
    fn latest(&self, agent: AgentId) -> Option<CreatureSnapshot>;
}

/// In-memory channel: the latest published snapshot is immediately visible
/// to every reader.
#[derive(Clone, Debug, Default)]
pub struct LoopbackChannel {
    latest: HashMap<AgentId, CreatureSnapshot>,
}

impl LoopbackChannel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReplicationChannel for LoopbackChannel {
    fn publish(&mut self, agent: AgentId, snapshot: CreatureSnapshot) {
        let slot = self.latest.entry(agent).or_insert(snapshot);
        if snapshot.seq >= slot.seq {
            *slot = snapshot;
        }
    }

    fn latest(&self, agent: AgentId) -> Option<CreatureSnapshot> {
        self.latest.get(&agent).copied()
    }
}
