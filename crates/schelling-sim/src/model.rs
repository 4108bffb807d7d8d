//! `SchellingModel` — the parameters-to-running-model facade used by the
//! server and the CLI.

use schelling_behavior::SchellingBehavior;
use schelling_core::SimConfig;
use tracing::info;

use crate::{ModelParams, Population, Sim, SimBuilder, SimResult, populate};

/// A live model: its parameters plus the sim built from them.
pub struct SchellingModel {
    pub params: ModelParams,
    pub sim:    Sim<SchellingBehavior>,
}

impl SchellingModel {
    /// Build a model with default run settings and `params.seed`.
    pub fn new(params: ModelParams) -> SimResult<Self> {
        let config = SimConfig { seed: params.seed, ..SimConfig::default() };
        Self::with_config(params, config)
    }

    /// Build a model with explicit run settings.  `config.seed` drives the
    /// activation order; `params.seed` drives population and agent RNGs.
    pub fn with_config(params: ModelParams, config: SimConfig) -> SimResult<Self> {
        let sim = build_sim(&params, config)?;
        Ok(Self { params, sim })
    }

    /// Rebuild the board from the current parameters.  The same seed yields
    /// the same initial board and trajectory.
    pub fn reset(&mut self) -> SimResult<()> {
        let config = self.sim.config.clone();
        self.sim = build_sim(&self.params, config)?;
        info!(seed = self.params.seed, "model reset");
        Ok(())
    }

    /// Replace the parameters and rebuild.  On error the old model is kept.
    pub fn reset_with(&mut self, params: ModelParams) -> SimResult<()> {
        let config = SimConfig { seed: params.seed, ..self.sim.config.clone() };
        self.sim = build_sim(&params, config)?;
        self.params = params;
        info!(seed = self.params.seed, "model reset with new parameters");
        Ok(())
    }

    /// Happy residents in the last executed step.
    pub fn happy(&self) -> usize {
        self.sim.happy()
    }
}

fn build_sim(params: &ModelParams, config: SimConfig) -> SimResult<Sim<SchellingBehavior>> {
    let Population { grid, agents, rngs } = populate(params)?;
    let behavior = SchellingBehavior::new(params.homophily)?;
    SimBuilder::new(config, grid, agents, rngs, behavior).build()
}
