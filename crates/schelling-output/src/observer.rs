//! Turns step callbacks into `model_vars` and `agent_snapshots` rows.

use schelling_agent::AgentStore;
use schelling_core::Tick;
use schelling_grid::SingleGrid;
use schelling_sim::{SimObserver, StepStats};
use tracing::{info, warn};

use crate::row::{AgentSnapshotRow, ModelVarsRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes model variables and agent snapshots to any
/// [`OutputWriter`] backend.
///
/// Observer callbacks cannot fail, so the first write error is held until
/// [`take_error`][Self::take_error] is called after the run.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed; further errors are dropped");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step_end(&mut self, tick: Tick, stats: &StepStats) {
        let row = ModelVarsRow::from_stats(tick.0, stats);
        let result = self.writer.write_model_vars(&row);
        self.rows += 1;
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, _grid: &SingleGrid, agents: &AgentStore) {
        let rows: Vec<AgentSnapshotRow> = agents
            .agent_ids()
            .map(|agent| {
                let i = agent.index();
                AgentSnapshotRow {
                    agent_id:         agent.0,
                    step:             tick.0,
                    x:                agents.pos[i].x,
                    y:                agents.pos[i].y,
                    group:            agents.group[i].0,
                    role:             agents.role[i],
                    steps_since_move: agents.steps_since_move[i],
                }
            })
            .collect();

        if !rows.is_empty() {
            self.rows += rows.len() as u64;
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
        info!(tick = %final_tick, rows = self.rows, "output finished");
    }
}
