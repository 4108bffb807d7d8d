//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `model_vars.csv`
//! - `agent_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, ModelVarsRow, OutputResult};

pub const MODEL_VARS_HEADER: [&str; 6] = ["step", "happy", "moved", "held", "hops", "failed_moves"];

pub const SNAPSHOT_HEADER: [&str; 7] =
    ["agent_id", "step", "x", "y", "group", "role", "steps_since_move"];

/// Writes run output to two CSV files.
pub struct CsvWriter {
    model_vars: Writer<File>,
    snapshots:  Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the two CSV files and write
    /// the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut model_vars = Writer::from_path(dir.join("model_vars.csv"))?;
        model_vars.write_record(MODEL_VARS_HEADER)?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        Ok(Self {
            model_vars,
            snapshots,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.step.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.group.to_string(),
                row.role.as_str().to_string(),
                row.steps_since_move.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_model_vars(&mut self, row: &ModelVarsRow) -> OutputResult<()> {
        self.model_vars.write_record(&[
            row.step.to_string(),
            row.happy.to_string(),
            row.moved.to_string(),
            row.held.to_string(),
            row.hops.to_string(),
            row.failed_moves.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.model_vars.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
