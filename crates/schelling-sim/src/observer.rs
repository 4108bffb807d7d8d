//! Simulation observer trait for progress reporting and data collection.

use schelling_agent::AgentStore;
use schelling_core::Tick;
use schelling_grid::SingleGrid;

use crate::StepStats;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — happiness printer
///
/// ```rust,ignore
/// struct HappyPrinter;
///
/// impl SimObserver for HappyPrinter {
///     fn on_step_end(&mut self, tick: Tick, stats: &StepStats) {
///         println!("{tick}: {} happy", stats.happy);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each step, before any agent is activated.
    fn on_step_start(&mut self, _tick: Tick) {}

    /// Called after every agent has been activated.
    fn on_step_end(&mut self, _tick: Tick, _stats: &StepStats) {}

    /// Called at snapshot intervals (every `config.output_interval_steps`
    /// steps) with read-only access to the board after the step.
    fn on_snapshot(
        &mut self,
        _tick:   Tick,
        _grid:   &SingleGrid,
        _agents: &AgentStore,
    ) {}

    /// Called once when the run finishes, with the first tick not executed.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
