//! `lc-behavior` — the creature's three-state brain.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`state`]      | `CreatureState` (`Idle`, `Alert`, `Jump`)                    |
//! | [`transition`] | `transition`: pure transition table returning entry/exit intents |
//! | [`intent`]     | `Intent` (`Face`, `ApplyImpulse`, `ExitState`, `EnterState`) |
//! | [`impulse`]    | `ImpulsePolicy`: cooldown-gated, randomized jump impulse     |
//! | [`config`]     | `CreatureConfig` with validation                             |
//! | [`creature`]   | `Creature` (per-agent state), `CreatureBrain` (tick logic)   |
//! | [`error`]      | `BehaviorError`, `BehaviorResult<T>`                         |
//!
//! # Tick order
//!
//! For each tick of an agent this participant has authority over:
//!
//! 1. Perception: is the target visible right now?
//! 2. Per-state update: pick a look target, turn toward it, maybe jump.
//! 3. If the refresh deadline is due, or the agent is idle and sees the
//!    target, evaluate the transition table.
//!
//! The brain never touches the host.  Everything it wants done comes back as
//! a list of [`Intent`]s for the caller to apply to the body.

pub mod config;
pub mod creature;
pub mod error;
pub mod impulse;
pub mod intent;
pub mod state;
pub mod transition;


pub use config::CreatureConfig;
pub use creature::{Creature, CreatureBrain, Timers, TickInput};
pub use error::{BehaviorError, BehaviorResult};
pub use impulse::{ImpulsePolicy, Shot};
pub use intent::Intent;
pub use state::CreatureState;
pub use transition::{Transition, next_state, transition};
