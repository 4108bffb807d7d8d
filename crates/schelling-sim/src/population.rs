//! Initial placement of residents and influencers.
//!
//! Cells are visited row by row.  Each is occupied with probability
//! `density`; an occupant joins the minority group with probability
//! `minority_pc`.  The first `num_type1` agents placed become positive
//! influencers and the next `num_type2` negative influencers, so
//! influencers cluster toward the top rows of the grid.  If fewer agents
//! are placed than influencers requested, only that many influencers exist.

use schelling_agent::{AgentRngs, AgentSpec, AgentStore, AgentStoreBuilder, Influence};
use schelling_core::{AgentId, GroupId, Pos, SimRng};
use schelling_grid::SingleGrid;
use tracing::info;

use crate::{ModelParams, SimError, SimResult};

/// Stream offset for population draws, kept apart from activation order.
pub(crate) const POPULATION_STREAM: u64 = 1;

/// A freshly populated board.
pub struct Population {
    pub grid:   SingleGrid,
    pub agents: AgentStore,
    pub rngs:   AgentRngs,
}

/// Build the grid and agents described by `params`.
pub fn populate(params: &ModelParams) -> SimResult<Population> {
    params.validate()?;

    let mut grid = SingleGrid::new(params.width, params.height, params.torus)?;
    let mut rng = SimRng::new(params.seed).child(POPULATION_STREAM);
    let mut builder = AgentStoreBuilder::with_capacity(params.seed, params.cell_count());

    let mut positive_left = params.num_type1;
    let mut negative_left = params.num_type2;

    for y in 0..params.height {
        for x in 0..params.width {
            if !rng.gen_bool(params.density) {
                continue;
            }
            let group = if rng.gen_bool(params.minority_pc) {
                GroupId::MINORITY
            } else {
                GroupId::MAJORITY
            };
            let pos = Pos::new(x, y);

            let spec = if positive_left > 0 {
                positive_left -= 1;
                AgentSpec::influencer(group, Influence::Positive, params.tolerance_rate_type1, pos)
            } else if negative_left > 0 {
                negative_left -= 1;
                AgentSpec::influencer(group, Influence::Negative, params.tolerance_rate_type2, pos)
            } else {
                AgentSpec::resident(group, pos)
            };

            let id = AgentId::try_from(builder.len())
                .map_err(|_| SimError::Config(format!("too many agents at {pos}")))?;
            grid.place_agent(id, pos)?;
            builder.add(spec);
        }
    }

    let (agents, rngs) = builder.build();
    info!(
        agents = agents.count,
        residents = agents.resident_count(),
        width = params.width,
        height = params.height,
        "population placed"
    );
    Ok(Population { grid, agents, rngs })
}
