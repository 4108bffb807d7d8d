//! Fluent builder for constructing a [`Sim`].

use schelling_agent::{AgentRngs, AgentStore};
use schelling_behavior::BehaviorModel;
use schelling_core::{SimConfig, SimRng, Tick};
use schelling_grid::SingleGrid;

use crate::{Sim, SimError, SimResult};

/// Stream offset for the activation-order RNG.
pub(crate) const ACTIVATION_STREAM: u64 = 2;

/// Fluent builder for [`Sim<B>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total steps, seed, snapshot interval, early stop
/// - [`SingleGrid`] with every agent already placed
/// - [`AgentStore`] + [`AgentRngs`] — from [`schelling_agent::AgentStoreBuilder`]
/// - `B: BehaviorModel` — the rule set
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default   |
/// |---------------------|-----------|
/// | `.start_tick(t)`    | `Tick(0)` |
///
/// # Example
///
/// ```rust,ignore
/// let Population { grid, agents, rngs } = populate(&params)?;
/// let mut sim = SimBuilder::new(config, grid, agents, rngs, SchellingBehavior::new(3)?)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<B: BehaviorModel> {
    config:     SimConfig,
    grid:       SingleGrid,
    agents:     AgentStore,
    rngs:       AgentRngs,
    behavior:   B,
    start_tick: Tick,
}

impl<B: BehaviorModel> SimBuilder<B> {
    pub fn new(
        config:   SimConfig,
        grid:     SingleGrid,
        agents:   AgentStore,
        rngs:     AgentRngs,
        behavior: B,
    ) -> Self {
        Self {
            config,
            grid,
            agents,
            rngs,
            behavior,
            start_tick: Tick::ZERO,
        }
    }

    pub fn start_tick(mut self, tick: Tick) -> Self {
        self.start_tick = tick;
        self
    }

    /// Check that agents, RNGs and grid occupancy agree, then return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<B>> {
        let agent_count = self.agents.count;

        if self.rngs.len() != agent_count {
            return Err(SimError::AgentCountMismatch {
                expected: agent_count,
                got:      self.rngs.len(),
                what:     "agent RNGs",
            });
        }
        if self.grid.occupied_count() != agent_count {
            return Err(SimError::AgentCountMismatch {
                expected: agent_count,
                got:      self.grid.occupied_count(),
                what:     "occupied cells",
            });
        }
        for agent in self.agents.agent_ids() {
            let pos = self.agents.pos[agent.index()];
            if self.grid.agent_at(pos) != Some(agent) {
                return Err(SimError::Placement { agent, pos });
            }
        }

        let rng = SimRng::new(self.config.seed).child(ACTIVATION_STREAM);

        Ok(Sim {
            tick:     self.start_tick,
            config:   self.config,
            grid:     self.grid,
            agents:   self.agents,
            rngs:     self.rngs,
            behavior: self.behavior,
            running:  true,
            history:  Vec::new(),
            rng,
        })
    }
}
