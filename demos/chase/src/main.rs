//! chase — two cats, one laser pointer, one living room.
//!
//! Scripted session run as a single participant:
//!
//! | Time (s) | Pointer                                           |
//! |----------|---------------------------------------------------|
//! | 0–2      | picked up, switched off                           |
//! | 2–12     | on, dot swept across the rug in front of the cats |
//! | 12–18    | on, dot parked behind the couch (out of sight)    |
//! | 18       | dropped; respawns home a minute later             |
//!
//! Set `RUST_LOG=lc_behavior=debug` to watch every state change and pounce.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lc_behavior::{CreatureConfig, CreatureState};
use lc_core::{AgentId, ParticipantId, SimClock, SimConfig, TargetId, Vec3};
use lc_perception::{Aabb, StaticScene};
use lc_sim::{
    ControllerBuilder, KinematicBody, LaserPointer, LocalOwnership, PointerConfig, SimBuilder,
    SimObserver,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:        u64 = 42;
const TICK_HZ:     f32 = 30.0;
const SIM_SECS:    f32 = 90.0;
const ME:          ParticipantId = ParticipantId(1);
const DOT:         TargetId = TargetId(0);
const CATS:        [AgentId; 2] = [AgentId(0), AgentId(1)];

const SWITCH_ON_AT: f32 = 2.0;
const HIDE_AT:      f32 = 12.0;
const DROP_AT:      f32 = 18.0;

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct ChaseLog {
    transitions: usize,
    pounces:     usize,
    driven:      usize,
}

impl SimObserver for ChaseLog {
    fn on_transition(&mut self, agent: AgentId, from: CreatureState, to: CreatureState) {
        self.transitions += 1;
        println!("  {agent}: {from} -> {to}");
    }

    fn on_impulse(&mut self, agent: AgentId, impulse: Vec3) {
        self.pounces += 1;
        println!("  {agent}: pounce {impulse}");
    }

    fn on_pointer_respawn(&mut self, pointer: TargetId) {
        println!("  {pointer}: back on its shelf");
    }

    fn on_tick_end(&mut self, _clock: &SimClock, driven: usize) {
        self.driven += driven;
    }

    fn on_sim_end(&mut self, clock: &SimClock) {
        println!();
        println!("Finished at {clock}");
        println!("  transitions: {}", self.transitions);
        println!("  pounces:     {}", self.pounces);
        println!("  cat-ticks driven locally: {}", self.driven);
    }
}

// ── Scene ─────────────────────────────────────────────────────────────────────

fn living_room() -> StaticScene {
    StaticScene::with_ground(0.0, [
        // Couch between the rug and the far wall.
        Aabb::from_center(Vec3::new(0.0, 0.5, 6.0), Vec3::new(2.0, 0.5, 0.5)),
        // Bookshelf off to the side.
        Aabb::from_center(Vec3::new(-4.0, 1.0, 2.0), Vec3::new(0.3, 1.0, 1.0)),
    ])
}

/// Where the holder aims at time `t`.
fn aim_point(t: f32) -> Vec3 {
    if t < HIDE_AT {
        Vec3::new(2.0 * (t * 0.8).sin(), 0.0, 3.0 + (t * 1.3).cos())
    } else {
        Vec3::new(0.0, 0.0, 9.0)
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::FmtSubscriber::builder().with_env_filter(filter).init();

    let config = SimConfig {
        tick_delta_secs: 1.0 / TICK_HZ,
        total_ticks:     (SIM_SECS * TICK_HZ) as u64,
        seed:            SEED,
    };
    println!("=== chase — laser-cat controller ===");
    println!("Cats: {}  |  Seconds: {SIM_SECS}  |  Seed: {SEED}", CATS.len());
    println!();

    let positions = [Vec3::new(-0.5, 0.25, 0.0), Vec3::new(0.8, 0.25, -0.4)];
    let mut builder = SimBuilder::new(config.clone(), living_room(), LocalOwnership::new(), ME);
    for (agent, position) in CATS.into_iter().zip(positions) {
        let controller = ControllerBuilder::new(agent, ME)
            .config(CreatureConfig::default())
            .seed(config.seed)
            .target(DOT)
            .build()?;
        builder = builder.creature(controller, KinematicBody::at(position));
    }
    let pointer = LaserPointer::new(DOT, CATS.to_vec(), PointerConfig {
        home_origin: Vec3::new(-4.0, 2.1, 2.0),
        ..Default::default()
    });
    let mut sim = builder.pointer(pointer).build()?;

    let mut log = ChaseLog::default();
    let holder_hand = Vec3::new(0.0, 4.0, 1.0);

    sim.pick_up_pointer(ME);
    info!("pointer picked up");

    while sim.clock.tick < config.end_tick() {
        let t = sim.clock.now;
        if t < DROP_AT {
            if let Some(pointer) = sim.pointer.as_mut() {
                pointer.set_pose(holder_hand, aim_point(t) - holder_hand);
                if t >= SWITCH_ON_AT && !pointer.is_on() {
                    info!("laser on");
                    pointer.press();
                }
            }
            if t >= HIDE_AT && t - sim.clock.delta < HIDE_AT {
                info!("dot hidden behind the couch");
            }
        } else if sim.pointer.as_ref().is_some_and(LaserPointer::is_held) {
            sim.drop_pointer();
            info!("pointer dropped");
        }
        sim.step(&mut log);
    }
    log.on_sim_end(&sim.clock);

    for agent in CATS {
        let controller = sim.controller(agent)?;
        let body = sim.body(agent)?;
        println!(
            "  {agent}: {} after {} pounces",
            controller.state(),
            body.impulses.len()
        );
    }

    Ok(())
}
