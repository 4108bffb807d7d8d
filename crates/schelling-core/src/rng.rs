//! Seeded random streams.
//!
//! A run draws from two kinds of stream:
//!
//! * [`SimRng`]: the model's own stream.  Population (which cells are
//!   occupied, which group each agent joins) and the activation order of
//!   every step come from children of one master `SimRng`.
//! * [`AgentRng`]: one per agent, seeded as
//!   `seed ^ (agent_id * MIXING_CONSTANT)`.  An agent's movement choices
//!   (which empty cell, which hop target) come only from its own stream.
//!
//! Agent choices therefore never shift the activation order, and the same
//! seed replays the same run.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Draws shared by both stream types.
macro_rules! draws {
    ($ty:ident) => {
        impl $ty {
            /// A uniformly random value of type `T`.
            #[inline]
            pub fn random<T>(&mut self) -> T
            where
                rand::distributions::Standard: rand::distributions::Distribution<T>,
            {
                self.0.r#gen()
            }

            /// `true` with probability `p`; `p` outside [0, 1] is clamped.
            #[inline]
            pub fn gen_bool(&mut self, p: f64) -> bool {
                self.0.gen_bool(p.clamp(0.0, 1.0))
            }

            /// One element picked uniformly; `None` for an empty slice.
            #[inline]
            pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
                items.choose(&mut self.0)
            }

            #[inline]
            pub fn shuffle<T>(&mut self, items: &mut [T]) {
                items.shuffle(&mut self.0);
            }
        }
    };
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// An agent's private stream for its movement choices.
pub struct AgentRng(SmallRng);

impl AgentRng {
    pub fn new(seed: u64, agent: AgentId) -> Self {
        let mixed = seed ^ u64::from(agent.0).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(mixed))
    }
}

draws!(AgentRng);

// ── SimRng ────────────────────────────────────────────────────────────────────

/// The model's stream: population draws and activation order.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Split off an independent stream.  `stream` distinguishes siblings
    /// split from the same parent state.
    pub fn child(&mut self, stream: u64) -> SimRng {
        let seed = self.0.r#gen::<u64>() ^ stream.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Agents `0..count` in a fresh random order: one step's activation
    /// sequence.
    pub fn activation_order(&mut self, count: usize) -> Vec<AgentId> {
        let mut order: Vec<AgentId> = (0..count as u32).map(AgentId).collect();
        self.shuffle(&mut order);
        order
    }
}

draws!(SimRng);
