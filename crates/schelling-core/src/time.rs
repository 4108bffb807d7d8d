//! Step counter and run configuration.
//!
//! The model advances in whole steps: one step activates every agent once in
//! a freshly shuffled order.  There is no wall-clock mapping.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute step counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level configuration for the step loop.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Total steps `Sim::run` executes.
    pub total_steps: u64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Emit an agent snapshot every N steps.  0 disables snapshots.
    pub output_interval_steps: u64,

    /// Stop `Sim::run` early once every resident is happy.
    pub stop_when_settled: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_steps:           100,
            seed:                  42,
            output_interval_steps: 1,
            stop_when_settled:     false,
        }
    }
}

impl SimConfig {
    /// The tick at which the run ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_steps)
    }

    /// `true` if a snapshot is due at `tick`.
    #[inline]
    pub fn snapshot_due(&self, tick: Tick) -> bool {
        self.output_interval_steps > 0 && tick.0 % self.output_interval_steps == 0
    }
}
