//! The `Sim` struct and its step loop.

use schelling_agent::{AgentRngs, AgentStore};
use schelling_behavior::{BehaviorModel, Intent, SimContext};
use schelling_core::{AgentId, Neighborhood, Pos, SimConfig, SimRng, Tick};
use schelling_grid::{GridError, SingleGrid};
use tracing::{debug, info};

use crate::{SimObserver, SimResult, StepStats};

/// The main simulation runner.
///
/// `Sim<B>` owns the board and drives random activation: every step shuffles
/// all agents with the model RNG and activates them one by one.  Each
/// agent's intents are applied before the next agent is asked, so later
/// agents see the moves of earlier ones.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: BehaviorModel> {
    pub config: SimConfig,

    /// The next step to execute.
    pub tick: Tick,

    pub grid: SingleGrid,

    /// Agent state (SoA arrays).  Behavior models read it through
    /// `SimContext`; only the sim writes to it.
    pub agents: AgentStore,

    /// Per-agent RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    pub behavior: B,

    /// Cleared once every resident is happy, if `config.stop_when_settled`.
    pub running: bool,

    /// One entry per executed step.
    pub history: Vec<StepStats>,

    /// Activation-order RNG.
    pub(crate) rng: SimRng,
}

impl<B: BehaviorModel> Sim<B> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`, or until the model
    /// stops running.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(from = %self.tick, to = %self.config.end_tick(), agents = self.agents.count, "run started");
        while self.running && self.tick < self.config.end_tick() {
            self.observed_step(observer)?;
        }
        observer.on_sim_end(self.tick);
        info!(tick = %self.tick, settled = !self.running, "run finished");
        Ok(())
    }

    /// Run exactly `n` steps from the current tick, ignoring `end_tick` and
    /// the `running` flag.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_step(observer)?;
        }
        Ok(())
    }

    /// Execute a single step without observer callbacks.
    pub fn step(&mut self) -> SimResult<StepStats> {
        let now = self.tick;

        let order = self.rng.activation_order(self.agents.count);

        let mut stats = StepStats::default();
        for agent in order {
            let intents = {
                let ctx = SimContext::new(now, &self.agents, &self.grid);
                self.behavior.step(agent, &ctx, self.rngs.get_mut(agent))
            };
            self.apply_intents(agent, intents, &mut stats)?;
        }

        debug!(
            tick = %now,
            happy = stats.happy,
            moved = stats.moved,
            held = stats.held,
            hops = stats.hops,
            failed = stats.failed_moves,
            "step complete"
        );

        self.history.push(stats);
        self.tick = now.next();
        if self.config.stop_when_settled && self.is_settled(&stats) {
            info!(tick = %now, happy = stats.happy, "every resident is happy; stopping");
            self.running = false;
        }
        Ok(stats)
    }

    /// Happy count of the last executed step (0 before the first step).
    pub fn happy(&self) -> usize {
        self.history.last().map_or(0, |s| s.happy)
    }

    /// `true` if every resident was happy during the step `stats` describes.
    pub fn is_settled(&self, stats: &StepStats) -> bool {
        stats.happy == self.agents.resident_count()
    }

    // ── Step internals ────────────────────────────────────────────────────

    fn observed_step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.tick;
        observer.on_step_start(now);
        let stats = self.step()?;
        observer.on_step_end(now, &stats);
        if self.config.snapshot_due(now) {
            observer.on_snapshot(now, &self.grid, &self.agents);
        }
        Ok(())
    }

    /// Apply one agent's intents in order.
    fn apply_intents(
        &mut self,
        agent:   AgentId,
        intents: Vec<Intent>,
        stats:   &mut StepStats,
    ) -> SimResult<()> {
        let mut moved = false;

        for intent in intents {
            match intent {
                Intent::Settle => stats.happy += 1,

                Intent::Hold => stats.held += 1,

                // ── Relocate: anywhere empty ───────────────────────────────
                Intent::Relocate => {
                    let from = self.agents.pos[agent.index()];
                    match self.grid.move_to_empty(from, self.rngs.get_mut(agent)) {
                        Ok(to) => {
                            self.agents.record_move(agent, to);
                            moved = true;
                        }
                        Err(GridError::NoEmptyCell) => {
                            debug!(%agent, "grid is full; agent stays");
                            stats.failed_moves += 1;
                        }
                        Err(e) => return Err(e.into()),
                    }
                }

                // ── Hop: short random moves near the current cell ──────────
                Intent::Hop { radius, attempts } => {
                    stats.hops += 1;
                    for _ in 0..attempts {
                        if self.try_hop(agent, radius)? {
                            moved = true;
                        } else {
                            stats.failed_moves += 1;
                        }
                    }
                }
            }
        }

        if moved {
            stats.moved += 1;
        } else {
            self.agents.record_stay(agent);
        }
        Ok(())
    }

    /// Pick a uniformly random cell within `radius` of the agent and move
    /// there if it is empty.  Returns whether the agent moved.
    fn try_hop(&mut self, agent: AgentId, radius: u32) -> SimResult<bool> {
        let from = self.agents.pos[agent.index()];
        let cells = self.grid.neighborhood(from, Neighborhood::Moore, false, radius);
        let target = match self.rngs.get_mut(agent).choose(&cells) {
            Some(&p) => p,
            None => return Ok(false),
        };
        self.try_move(agent, target)
    }

    /// Move `agent` to `to` if that cell is empty.  Returns whether it moved.
    fn try_move(&mut self, agent: AgentId, to: Pos) -> SimResult<bool> {
        if !self.grid.is_cell_empty(to) {
            return Ok(false);
        }
        let from = self.agents.pos[agent.index()];
        self.grid.move_agent(from, to)?;
        self.agents.record_move(agent, to);
        Ok(true)
    }
}
