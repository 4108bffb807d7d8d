//! Plain data row types written by output backends.

use schelling_agent::Role;
use schelling_sim::StepStats;

/// Model-level variables for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelVarsRow {
    pub step:         u64,
    pub happy:        u64,
    pub moved:        u64,
    pub held:         u64,
    pub hops:         u64,
    pub failed_moves: u64,
}

impl ModelVarsRow {
    pub fn from_stats(step: u64, stats: &StepStats) -> Self {
        Self {
            step,
            happy:        stats.happy as u64,
            moved:        stats.moved as u64,
            held:         stats.held as u64,
            hops:         stats.hops as u64,
            failed_moves: stats.failed_moves as u64,
        }
    }
}

/// One agent's cell and identity at a snapshot step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    pub agent_id:         u32,
    pub step:             u64,
    pub x:                u32,
    pub y:                u32,
    pub group:            u8,
    pub role:             Role,
    pub steps_since_move: u64,
}
