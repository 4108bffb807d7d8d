//! The `BehaviorModel` trait — the extension point for movement rules.

use schelling_core::{AgentId, AgentRng};

use crate::{Intent, SimContext};

/// Pluggable agent behavior.
///
/// Implementations receive a read-only [`SimContext`] and the agent's own
/// [`AgentRng`], and return the intents to apply.  An empty `Vec` means
/// "do nothing this step".
///
/// # Example
///
/// ```rust
/// use schelling_behavior::{BehaviorModel, Intent, SimContext};
/// use schelling_core::{AgentId, AgentRng};
///
/// /// Residents who always pack up and leave.
/// struct Restless;
///
/// impl BehaviorModel for Restless {
///     fn step(&self, _agent: AgentId, _ctx: &SimContext<'_>, _rng: &mut AgentRng) -> Vec<Intent> {
///         vec![Intent::Relocate]
///     }
/// }
/// ```
pub trait BehaviorModel: Send + Sync + 'static {
    /// Called once per agent per step, in random activation order.
    fn step(
        &self,
        agent: AgentId,
        ctx:   &SimContext<'_>,
        rng:   &mut AgentRng,
    ) -> Vec<Intent>;
}
