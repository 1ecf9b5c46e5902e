//! `lc-sim` — wiring the creature brain into a shared session.
//!
//! # Per-agent tick
//!
//! ```text
//! ① Authority  — ask the ownership oracle who drives this agent.
//!   not us     → mirror the newest replicated snapshot (if any) and stop.
//! ② Pose       — read the body transform; invalid → skip this tick.
//! ③ Brain      — CreatureBrain::tick → Vec<Intent>.
//! ④ Apply      — Face / ApplyImpulse / Enter/ExitState onto the body.
//! ⑤ Publish    — broadcast a CreatureSnapshot to the other participants.
//! ```
//!
//! # Crate layout
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`authority`]   | `OwnershipOracle`, `NetObject`, `AuthorityGate`, `LocalOwnership` |
//! | [`replication`] | `CreatureSnapshot`, `ReplicationChannel`, `LoopbackChannel` |
//! | [`body`]        | `CreatureBody`, `KinematicBody`, `apply_intents`         |
//! | [`controller`]  | `CreatureController`, `HostContext`, `TickOutcome`       |
//! | [`builder`]     | `ControllerBuilder`, `SimBuilder`                        |
//! | [`pointer`]     | `LaserPointer`: pickup handoff, dot projection, respawn |
//! | [`observer`]    | `SimObserver`, `NoopObserver`                            |
//! | [`sim`]         | `Sim`: multi-agent session loop                         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let controller = ControllerBuilder::new(AgentId(0), me).seed(7).target(TargetId(0)).build()?;
//! let mut sim = SimBuilder::new(config, scene, LocalOwnership::new(), me)
//!     .creature(controller, KinematicBody::at(Vec3::new(0.0, 0.25, 0.0)))
//!     .pointer(LaserPointer::new(TargetId(0), vec![AgentId(0)], PointerConfig::default()))
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod authority;
pub mod body;
pub mod builder;
pub mod controller;
pub mod error;
pub mod observer;
pub mod pointer;
pub mod replication;
pub mod sim;


pub use authority::{AuthorityGate, LocalOwnership, NetObject, OwnershipOracle};
pub use body::{CreatureBody, KinematicBody, apply_intents};
pub use builder::{ControllerBuilder, SimBuilder};
pub use controller::{CreatureController, HostContext, TickOutcome};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use pointer::{LaserPointer, PointerConfig};
pub use replication::{CreatureSnapshot, LoopbackChannel, ReplicationChannel};
pub use sim::Sim;
