//! The laser pointer: a pickup whose dot is the creatures' target.
//!
//! Holding the trigger switches the dot on.  Whoever picks the pointer up is
//! granted authority over the dot and every linked creature, so the person
//! playing with the cat also drives its physics.  A pointer dropped by the
//! local participant respawns at its home pose once it has been left alone
//! for `respawn_after_secs`.

use tracing::debug;

use lc_core::{AgentId, Deadline, ParticipantId, TargetId, Vec3};
use lc_perception::SpatialQuery;

use crate::{NetObject, OwnershipOracle};

/// Longest distance the beam travels.
pub const BEAM_RANGE: f32 = 1000.0;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerConfig {
    /// Seconds an abandoned pointer waits before respawning.
    pub respawn_after_secs: f32,
    /// The dot hovers this far off the surface it lands on.
    pub surface_offset: f32,
    /// Pose the pointer returns to on respawn.
    pub home_origin:    Vec3,
    pub home_direction: Vec3,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            respawn_after_secs: 60.0,
            surface_offset:     0.01,
            home_origin:        Vec3::new(0.0, 1.0, 0.0),
            home_direction:     Vec3::NEG_Y,
        }
    }
}

/// A held laser pointer whose dot is the target of its linked creatures.
pub struct LaserPointer {
    id:        TargetId,
    config:    PointerConfig,
    linked:    Vec<AgentId>,
    origin:    Vec3,
    direction: Vec3,
    trigger:   bool,
    holder:    Option<ParticipantId>,
    respawn:   Option<Deadline>,
    dot:       Option<Vec3>,
}

impl LaserPointer {
    /// A pointer at its home pose, switched off and not held.
    pub fn new(id: TargetId, linked: Vec<AgentId>, config: PointerConfig) -> Self {
        Self {
            id,
            origin: config.home_origin,
            direction: config.home_direction.normalize_or_zero(),
            config,
            linked,
            trigger: false,
            holder: None,
            respawn: None,
            dot: None,
        }
    }

    #[inline]
    pub fn id(&self) -> TargetId {
        self.id
    }

    pub fn linked(&self) -> &[AgentId] {
        &self.linked
    }

    pub fn holder(&self) -> Option<ParticipantId> {
        self.holder
    }

    pub fn is_held(&self) -> bool {
        self.holder.is_some()
    }

    /// `true` while the trigger is held.
    pub fn is_on(&self) -> bool {
        self.trigger
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Move the pointer (the holder's hand drives this every frame).
    pub fn set_pose(&mut self, origin: Vec3, direction: Vec3) {
        self.origin = origin;
        self.direction = direction.normalize_or_zero();
    }

    pub fn press(&mut self) {
        self.trigger = true;
    }

    pub fn release(&mut self) {
        self.trigger = false;
    }

    /// `participant` grabs the pointer and takes over the dot and the cats.
    pub fn pick_up<O: OwnershipOracle + ?Sized>(&mut self, participant: ParticipantId, oracle: &mut O) {
        self.holder = Some(participant);
        self.respawn = None;
        oracle.request_authority(NetObject::Target(self.id), participant);
        for &agent in &self.linked {
            oracle.request_authority(NetObject::Agent(agent), participant);
        }
        debug!(pointer = %self.id, holder = %participant, linked = self.linked.len(), "pointer picked up");
    }

    /// The holder lets go.  The beam switches off; if the local participant
    /// was holding it, the respawn countdown starts.
    pub fn drop_at(&mut self, now: f32, local: ParticipantId) {
        if self.holder == Some(local) {
            let mut deadline = Deadline::default();
            deadline.reset(now, self.config.respawn_after_secs);
            self.respawn = Some(deadline);
        }
        self.holder = None;
        self.trigger = false;
    }

    /// `true` once an abandoned pointer has waited out its respawn delay.
    pub fn should_respawn(&self, now: f32) -> bool {
        !self.is_held() && self.respawn.is_some_and(|d| d.is_due(now))
    }

    /// Return to the home pose and clear the countdown.
    pub fn respawn(&mut self) {
        debug!(pointer = %self.id, "pointer respawned");
        self.set_pose(self.config.home_origin, self.config.home_direction);
        self.respawn = None;
        self.dot = None;
    }

    /// Cast the beam and park the dot on the first surface it hits, lifted
    /// off the surface along its normal.  Returns the dot position.
    pub fn update_dot<Q: SpatialQuery + ?Sized>(&mut self, query: &Q) -> Option<Vec3> {
        if self.direction == Vec3::ZERO {
            return self.dot;
        }
        if let Some(hit) = query.raycast(self.origin, self.direction, BEAM_RANGE) {
            self.dot = Some(hit.point + hit.normal * self.config.surface_offset);
        }
        self.dot
    }

    /// Last projected dot position, whether or not the beam is on.
    pub fn dot(&self) -> Option<Vec3> {
        self.dot
    }

    /// The creatures' target: the dot, but only while the beam is on.
    pub fn target(&self) -> Option<Vec3> {
        self.dot.filter(|_| self.trigger)
    }
}
