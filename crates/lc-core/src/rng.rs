//! Per-creature random streams.
//!
//! Every creature draws from its own `SmallRng`, seeded from the session
//! seed and its agent id:
//!
//!   seed = session_seed XOR (agent_id * GOLDEN_GAMMA)
//!
//! Multiplying by the golden-ratio gamma scatters neighbouring ids across the
//! seed space.  Because no stream is shared, the tick order of creatures never
//! changes what any one of them wanders toward or how hard it pounces.

use glam::{Vec2, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// Random stream owned by one creature.
pub struct AgentRng(SmallRng);

impl AgentRng {
    pub fn new(session_seed: u64, agent: AgentId) -> Self {
        let seed = session_seed ^ u64::from(agent.0).wrapping_mul(GOLDEN_GAMMA);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform sample from `range` (pounce force).
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform point inside the unit disc (rejection sampling).
    pub fn inside_unit_circle(&mut self) -> Vec2 {
        loop {
            let p = Vec2::new(self.0.gen_range(-1.0..=1.0), self.0.gen_range(-1.0..=1.0));
            if p.length_squared() <= 1.0 {
                return p;
            }
        }
    }

    /// Random unit vector in the horizontal (XZ) plane, used for idle
    /// wandering.  The degenerate centre sample is redrawn.
    pub fn horizontal_direction(&mut self) -> Vec3 {
        loop {
            let p = self.inside_unit_circle();
            if let Some(dir) = Vec3::new(p.x, 0.0, p.y).try_normalize() {
                return dir;
            }
        }
    }
}
