//! Read-only simulation state passed to every behavior callback.

use schelling_agent::AgentStore;
use schelling_core::Tick;
use schelling_grid::SingleGrid;

/// A read-only view of the model handed to [`BehaviorModel::step`][crate::BehaviorModel::step].
///
/// Built fresh for every activated agent so it always reflects moves made
/// earlier in the same step.
pub struct SimContext<'a> {
    pub tick: Tick,

    pub agents: &'a AgentStore,

    pub grid: &'a SingleGrid,
}

impl<'a> SimContext<'a> {
    #[inline]
    pub fn new(tick: Tick, agents: &'a AgentStore, grid: &'a SingleGrid) -> Self {
        Self { tick, agents, grid }
    }
}
