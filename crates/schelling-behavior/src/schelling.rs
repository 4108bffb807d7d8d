//! The Schelling rule set extended with social influencers.
//!
//! # Residents
//!
//! A resident counts the *residents* of its own group in its Moore
//! neighborhood.  With at least `homophily` of them it is happy and stays.
//! Otherwise the influencers next to it decide:
//!
//! | Nearby influencers      | Outcome                                   |
//! |-------------------------|-------------------------------------------|
//! | any positive            | `Hold` — stays despite being unhappy      |
//! | negative only           | `Hop` — two short random hops (radius 2)  |
//! | none                    | `Relocate` — random empty cell anywhere   |
//!
//! # Influencers
//!
//! An influencer counts neighbors of its own group plus neighbors of the
//! majority group (influencers included in both).  If the sum is below its
//! own `tolerance` it relocates.  A majority-group influencer therefore
//! counts each majority neighbor twice.

use schelling_agent::Influence;
use schelling_core::{AgentId, AgentRng, GroupId, Neighborhood};

use crate::{BehaviorError, BehaviorModel, BehaviorResult, Intent, SimContext};

/// Tallies of one agent's neighborhood, from that agent's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeighborCounts {
    /// Neighbors of the same group, influencers included.
    pub same_group: usize,
    /// Residents of the same group.
    pub same_group_residents: usize,
    /// Neighbors of the majority group, influencers included.
    pub majority: usize,
    pub positive_influencers: usize,
    pub negative_influencers: usize,
}

/// Homophily-driven movement with positive and negative influencers.
#[derive(Debug, Clone)]
pub struct SchellingBehavior {
    /// Like-resident neighbors a resident needs to be happy.
    pub homophily: u8,
    /// Group that influencers add to their own-group count.
    pub majority: GroupId,
    /// Radius of the neighborhood agents inspect.
    pub radius: u32,
    /// Radius of each hop under negative influence.
    pub hop_radius: u32,
    /// Hops attempted per step under negative influence.
    pub hop_attempts: u32,
}

impl SchellingBehavior {
    pub const DEFAULT_HOP_RADIUS: u32 = 2;
    pub const DEFAULT_HOP_ATTEMPTS: u32 = 2;

    /// Rules with radius-1 neighborhoods and the default hop settings.
    ///
    /// `homophily` larger than the neighborhood (8) could never be
    /// satisfied and is rejected.
    pub fn new(homophily: u8) -> BehaviorResult<Self> {
        let max = Neighborhood::Moore.size(1);
        if homophily as usize > max {
            return Err(BehaviorError::Config(format!(
                "homophily {homophily} exceeds neighborhood size {max}"
            )));
        }
        Ok(Self {
            homophily,
            majority:     GroupId::MAJORITY,
            radius:       1,
            hop_radius:   Self::DEFAULT_HOP_RADIUS,
            hop_attempts: Self::DEFAULT_HOP_ATTEMPTS,
        })
    }

    pub fn with_hops(mut self, radius: u32, attempts: u32) -> BehaviorResult<Self> {
        if radius == 0 {
            return Err(BehaviorError::Config("hop radius must be at least 1".into()));
        }
        self.hop_radius = radius;
        self.hop_attempts = attempts;
        Ok(self)
    }

    /// Count `agent`'s neighbors as seen by the rule set.
    pub fn count_neighbors(&self, agent: AgentId, ctx: &SimContext<'_>) -> NeighborCounts {
        let agents = ctx.agents;
        let me = agent.index();
        let my_group = agents.group[me];

        let mut counts = NeighborCounts::default();
        for other in ctx.grid.neighbors(agents.pos[me], Neighborhood::Moore, false, self.radius) {
            let i = other.index();
            let group = agents.group[i];
            if group == my_group {
                counts.same_group += 1;
            }
            if group == self.majority {
                counts.majority += 1;
            }
            match agents.role[i].influence() {
                None if group == my_group => counts.same_group_residents += 1,
                None => {}
                Some(Influence::Positive) => counts.positive_influencers += 1,
                Some(Influence::Negative) => counts.negative_influencers += 1,
            }
        }
        counts
    }

    fn influencer_step(&self, agent: AgentId, ctx: &SimContext<'_>) -> Vec<Intent> {
        let counts = self.count_neighbors(agent, ctx);
        let tolerance = ctx.agents.tolerance[agent.index()] as usize;
        if counts.same_group + counts.majority < tolerance {
            vec![Intent::Relocate]
        } else {
            vec![]
        }
    }

    fn resident_step(&self, agent: AgentId, ctx: &SimContext<'_>) -> Vec<Intent> {
        let counts = self.count_neighbors(agent, ctx);
        if counts.same_group_residents >= self.homophily as usize {
            vec![Intent::Settle]
        } else if counts.positive_influencers > 0 {
            vec![Intent::Hold]
        } else if counts.negative_influencers > 0 {
            vec![Intent::Hop { radius: self.hop_radius, attempts: self.hop_attempts }]
        } else {
            vec![Intent::Relocate]
        }
    }
}

impl BehaviorModel for SchellingBehavior {
    fn step(
        &self,
        agent: AgentId,
        ctx:   &SimContext<'_>,
        _rng:  &mut AgentRng,
    ) -> Vec<Intent> {
        if ctx.agents.is_influencer(agent) {
            self.influencer_step(agent, ctx)
        } else {
            self.resident_step(agent, ctx)
        }
    }
}
