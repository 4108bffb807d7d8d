//! Agent intents — what an agent asks the sim to do on its activation.

/// An action requested by [`BehaviorModel::step`][crate::BehaviorModel::step]
/// and applied immediately by the sim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// The agent is content where it is.  Counts toward the step's happy
    /// tally.
    Settle,

    /// The agent is unhappy but stays put (held by a positive influencer).
    Hold,

    /// Move to a uniformly random empty cell anywhere on the grid.
    ///
    /// A full grid leaves the agent in place.
    Relocate,

    /// Up to `attempts` short hops: each picks a random cell within `radius`
    /// of the agent's *current* position (Moore, center excluded) and moves
    /// there only if that cell is empty.
    Hop { radius: u32, attempts: u32 },
}
