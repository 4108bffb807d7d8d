//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use schelling_agent::{AgentSpec, AgentStoreBuilder, Influence};
//! use schelling_core::{GroupId, Pos};
//!
//! let (store, rngs) = AgentStoreBuilder::new(42)
//!     .push(AgentSpec::influencer(GroupId::MAJORITY, Influence::Positive, 8, Pos::new(0, 0)))
//!     .push(AgentSpec::resident(GroupId::MINORITY, Pos::new(1, 0)))
//!     .build();
//!
//! assert_eq!(store.count, 2);
//! assert_eq!(rngs.len(), 2);
//! ```

use crate::{AgentRngs, AgentSpec, AgentStore};

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
///
/// Agent IDs are assigned in push order starting at 0.
pub struct AgentStoreBuilder {
    seed:  u64,
    specs: Vec<AgentSpec>,
}

impl AgentStoreBuilder {
    /// Create a builder using `seed` as the global RNG seed.
    pub fn new(seed: u64) -> Self {
        Self { seed, specs: Vec::new() }
    }

    pub fn with_capacity(seed: u64, capacity: usize) -> Self {
        Self { seed, specs: Vec::with_capacity(capacity) }
    }

    pub fn push(mut self, spec: AgentSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// Non-consuming variant of [`push`](Self::push) for loops.
    pub fn add(&mut self, spec: AgentSpec) -> &mut Self {
        self.specs.push(spec);
        self
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Construct `AgentStore` and `AgentRngs`.
    pub fn build(self) -> (AgentStore, AgentRngs) {
        let rngs = AgentRngs::new(self.specs.len(), self.seed);
        let store = AgentStore::new(self.specs);
        (store, rngs)
    }
}
