//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter with no wall-clock
//! mapping: one tick is one synchronized stop for the whole fleet.  All
//! drivers evaluate co-location and advance together, so tick arithmetic is
//! exact integer arithmetic and comparisons are O(1).

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64`; the default horizon is 480 ticks but callers may raise it
/// arbitrarily without overflow concerns.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Default tick horizon: one stop per minute over an eight-hour driving
/// shift (8 × 60 = 480).  A fleet that has not fully converged by the end of
/// the shift is reported as never converging.
pub const DEFAULT_HORIZON_TICKS: u64 = 480;

/// Top-level simulation configuration.
///
/// Constructed by the application crate and passed to the simulation engine.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Maximum ticks to simulate before declaring non-convergence.  The
    /// horizon is a policy knob: larger fleets or longer routes may need a
    /// longer shift.
    pub horizon_ticks: u64,

    /// Master RNG seed for synthetic fleet generation.  The engine itself is
    /// deterministic and consumes no randomness.
    pub seed: u64,

    /// Emit an observer snapshot every N ticks.  0 disables snapshots;
    /// 1 snapshots every tick.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            horizon_ticks:         DEFAULT_HORIZON_TICKS,
            seed:                  0,
            output_interval_ticks: 0,
        }
    }
}

impl SimConfig {
    /// The last tick the engine will simulate (inclusive).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.horizon_ticks)
    }
}
