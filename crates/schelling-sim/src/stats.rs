//! Per-step tallies.

use serde::{Deserialize, Serialize};

/// What happened during one step.
///
/// `happy` is the model-level "Happy" reporter: residents whose like-resident
/// neighbor count met the homophily threshold when they were activated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepStats {
    pub happy: usize,
    /// Agents that completed at least one move this step, even if a later
    /// hop brought them back to their starting cell.
    pub moved: usize,
    /// Unhappy residents kept in place by a positive influencer.
    pub held: usize,
    /// Residents sent hopping by a negative influencer, whether or not
    /// either attempt found an empty cell.
    pub hops: usize,
    /// Movement attempts that found no free target.
    pub failed_moves: usize,
}
