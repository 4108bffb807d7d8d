//! A no-op behavior model — agents never produce intents.

use schelling_core::{AgentId, AgentRng};

use crate::{BehaviorModel, Intent, SimContext};

/// A [`BehaviorModel`] that always returns an empty intent list.
///
/// Useful in tests for agents that simply occupy cells.
pub struct NoopBehavior;

impl BehaviorModel for NoopBehavior {
    fn step(
        &self,
        _agent: AgentId,
        _ctx:   &SimContext<'_>,
        _rng:   &mut AgentRng,
    ) -> Vec<Intent> {
        vec![]
    }
}
