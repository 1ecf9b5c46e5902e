//! Who drives what.
//!
//! Exactly one participant is authoritative for a networked object at a time.
//! Transfers are requested through the host's ownership service and take
//! effect atomically between ticks; the controller only ever asks "is it me?"
//! at the start of a tick.

use std::collections::HashMap;

use tracing::debug;

use lc_core::{AgentId, ParticipantId, TargetId};

/// A networked object whose ownership the host tracks.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum NetObject {
    Agent(AgentId),
    Target(TargetId),
}

impl From<AgentId> for NetObject {
    fn from(id: AgentId) -> Self {
        NetObject::Agent(id)
    }
}

impl From<TargetId> for NetObject {
    fn from(id: TargetId) -> Self {
        NetObject::Target(id)
    }
}

/// The host's ownership service.
pub trait OwnershipOracle {
    /// Current authority for `object`, `None` if nobody holds it.
    fn authority(&self, object: NetObject) -> Option<ParticipantId>;

    /// Ask for `participant` to become the authority of `object`.
    fn request_authority(&mut self, object: NetObject, participant: ParticipantId);
}

/// Decides whether the local participant drives a given agent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AuthorityGate {
    pub local: ParticipantId,
}

impl AuthorityGate {
    pub fn new(local: ParticipantId) -> Self {
        Self { local }
    }

    #[inline]
    pub fn is_authority<O: OwnershipOracle + ?Sized>(&self, agent: AgentId, oracle: &O) -> bool {
        oracle.authority(NetObject::Agent(agent)) == Some(self.local)
    }
}

/// In-process ownership table that grants every request immediately.
///
/// Suitable for single-machine sessions and tests; networked hosts implement
/// [`OwnershipOracle`] on top of their own transport.
#[derive(Clone, Debug, Default)]
pub struct LocalOwnership {
    owners: HashMap<NetObject, ParticipantId>,
}

impl LocalOwnership {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style initial assignment.
    pub fn with_owner(mut self, object: impl Into<NetObject>, participant: ParticipantId) -> Self {
        self.owners.insert(object.into(), participant);
        self
    }
}

impl OwnershipOracle for LocalOwnership {
    fn authority(&self, object: NetObject) -> Option<ParticipantId> {
        self.owners.get(&object).copied()
    }

    fn request_authority(&mut self, object: NetObject, participant: ParticipantId) {
        let previous = self.owners.insert(object, participant);
        if previous != Some(participant) {
            debug!(?object, ?previous, new = %participant, "authority transferred");
        }
    }
}
