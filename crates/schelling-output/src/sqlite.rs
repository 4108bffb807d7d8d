//! `output.db`: the same rows as the CSV backend in two SQLite tables,
//! `model_vars` and `agent_snapshots` (feature `sqlite`).

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, ModelVarsRow, OutputResult};

/// Writes run output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Create `dir` if needed, open (or create) `output.db` in it and
    /// initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS model_vars (
                 step         INTEGER PRIMARY KEY,
                 happy        INTEGER NOT NULL,
                 moved        INTEGER NOT NULL,
                 held         INTEGER NOT NULL,
                 hops         INTEGER NOT NULL,
                 failed_moves INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS agent_snapshots (
                 agent_id         INTEGER NOT NULL,
                 step             INTEGER NOT NULL,
                 x                INTEGER NOT NULL,
                 y                INTEGER NOT NULL,
                 grp              INTEGER NOT NULL,
                 role             TEXT    NOT NULL,
                 steps_since_move INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO agent_snapshots \
                 (agent_id, step, x, y, grp, role, steps_since_move) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.agent_id,
                    row.step as i64,
                    row.x,
                    row.y,
                    row.group,
                    row.role.as_str(),
                    row.steps_since_move as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_model_vars(&mut self, row: &ModelVarsRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO model_vars (step, happy, moved, held, hops, failed_moves) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                row.step as i64,
                row.happy as i64,
                row.moved as i64,
                row.held as i64,
                row.hops as i64,
                row.failed_moves as i64,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
