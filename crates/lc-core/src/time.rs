//! Simulation time model.
//!
//! # Design
//!
//! The host drives the controller with one callback per frame.  Each call
//! carries the monotonic time in seconds and the frame delta:
//!
//!   now(tick n+1) = now(tick n) + delta
//!
//! Actions that must not happen every frame are gated by a [`Deadline`]: an
//! action is eligible once `now >= deadline`, after which the deadline is
//! pushed to `now + interval`.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Monotonic clock handed to the controller every tick.
///
/// `SimClock` is cheap to copy and holds no heap data.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Seconds since the session started.
    pub now: f32,
    /// Seconds elapsed during the current tick.
    pub delta: f32,
    /// Frame counter.
    pub tick: Tick,
}

impl SimClock {
    /// A clock at time zero that will advance by `delta` each tick.
    pub fn new(delta: f32) -> Self {
        Self { now: 0.0, delta, tick: Tick::ZERO }
    }

    /// Advance one frame using the current `delta`.
    #[inline]
    pub fn advance(&mut self) {
        self.now += self.delta;
        self.tick = self.tick + 1;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3}s)", self.tick, self.now)
    }
}

// ── Deadline ──────────────────────────────────────────────────────────────────

/// A future timestamp gating a repeating action.
///
/// The default deadline is `0.0`, so a fresh timer is due on the first tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deadline(pub f32);

impl Deadline {
    /// `true` once `now` has reached the deadline.
    #[inline]
    pub fn is_due(self, now: f32) -> bool {
        now >= self.0
    }

    /// Push the deadline to `now + interval`.
    #[inline]
    pub fn reset(&mut self, now: f32, interval: f32) {
        self.0 = now + interval;
    }

    /// If due, reset to `now + interval` and return `true`.
    #[inline]
    pub fn try_fire(&mut self, now: f32, interval: f32) -> bool {
        if self.is_due(now) {
            self.reset(now, interval);
            true
        } else {
            false
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level session configuration for the multi-agent runner.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Fixed seconds per tick.
    pub tick_delta_secs: f32,

    /// Total ticks for `Sim::run`.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl SimConfig {
    /// The tick at which the session ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_delta_secs)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_delta_secs: 1.0 / 60.0,
            total_ticks:     600,
            seed:            0,
        }
    }
}
