//! `AgentStore` holds residents and influencers column by column; `AgentRngs`
//! holds one movement RNG per agent.
//!
//! An agent's step reads the whole population (`&AgentStore`, through the
//! behavior context) while drawing from its own RNG (`&mut AgentRng`).  Keeping
//! the RNGs in a separate `AgentRngs` lets the sim hold both borrows at once.

use schelling_core::{AgentId, AgentRng, GroupId, Pos};

use crate::{AgentSpec, Influence, Role};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] for the
/// split-borrow described above.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Residents and influencers, one column per attribute.
///
/// All columns have `count` entries and `AgentId` indexes them.  `pos`
/// mirrors the grid: the sim updates it in the same apply step that moves
/// the agent on the `SingleGrid`.
pub struct AgentStore {
    /// Residents plus influencers.
    pub count: usize,

    pub group: Vec<GroupId>,

    pub role: Vec<Role>,

    /// Influencer relocation threshold (see [`AgentSpec::tolerance`]).
    pub tolerance: Vec<u8>,

    /// Current cell.
    pub pos: Vec<Pos>,

    /// Steps since the agent last changed cell.
    pub steps_since_move: Vec<u64>,
}

impl AgentStore {
    pub(crate) fn new(specs: Vec<AgentSpec>) -> Self {
        let count = specs.len();
        Self {
            count,
            group:            specs.iter().map(|s| s.group).collect(),
            role:             specs.iter().map(|s| s.role).collect(),
            tolerance:        specs.iter().map(|s| s.tolerance).collect(),
            pos:              specs.iter().map(|s| s.pos).collect(),
            steps_since_move: vec![0; count],
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn is_influencer(&self, agent: AgentId) -> bool {
        self.role[agent.index()].is_influencer()
    }

    #[inline]
    pub fn influence(&self, agent: AgentId) -> Option<Influence> {
        self.role[agent.index()].influence()
    }

    /// Number of agents with exactly this role.
    pub fn count_role(&self, role: Role) -> usize {
        self.role.iter().filter(|&&r| r == role).count()
    }

    pub fn resident_count(&self) -> usize {
        self.count_role(Role::Resident)
    }

    // ── Apply-phase mutators ──────────────────────────────────────────────

    /// Record that `agent` now stands on `to`.
    #[inline]
    pub fn record_move(&mut self, agent: AgentId, to: Pos) {
        let i = agent.index();
        self.pos[i] = to;
        self.steps_since_move[i] = 0;
    }

    /// Record a step in which `agent` did not change cell.
    #[inline]
    pub fn record_stay(&mut self, agent: AgentId) {
        self.steps_since_move[agent.index()] += 1;
    }
}
