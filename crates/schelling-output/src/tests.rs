//! Integration tests for schelling-output.

#[cfg(test)]
mod csv_tests {
    use schelling_agent::{Influence, Role};
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AgentSnapshotRow, ModelVarsRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, step: u64) -> AgentSnapshotRow {
        AgentSnapshotRow {
            agent_id,
            step,
            x:                agent_id,
            y:                agent_id * 2,
            group:            1,
            role:             Role::Resident,
            steps_since_move: 4,
        }
    }

    fn read_rows(path: std::path::PathBuf) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("model_vars.csv").exists());
        assert!(dir.path().join("agent_snapshots.csv").exists());
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("model_vars.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("model_vars.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["step", "happy", "moved", "held", "hops", "failed_moves"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["agent_id", "step", "x", "y", "group", "role", "steps_since_move"]);
    }

    #[test]
    fn csv_snapshot_columns() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let mut influencer = snap_row(2, 5);
        influencer.role = Role::Influencer(Influence::Negative);
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5), influencer]).unwrap();
        w.finish().unwrap();

        let rows = read_rows(dir.path().join("agent_snapshots.csv"));
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[1][0], "1"); // agent_id
        assert_eq!(&rows[1][1], "5"); // step
        assert_eq!(&rows[1][3], "2"); // y
        assert_eq!(&rows[1][5], "resident");
        assert_eq!(&rows[2][5], "negative_influencer");
    }

    #[test]
    fn csv_model_vars_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_model_vars(&ModelVarsRow {
            step: 3, happy: 120, moved: 40, held: 2, hops: 1, failed_moves: 0,
        }).unwrap();
        w.finish().unwrap();

        let rows = read_rows(dir.path().join("model_vars.csv"));
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "120");
        assert_eq!(&rows[0][2], "40");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn integration_csv() {
        use schelling_core::SimConfig;
        use schelling_sim::{ModelParams, SchellingModel};

        use crate::observer::SimOutputObserver;

        let params = ModelParams { width: 5, height: 4, density: 1.0, ..ModelParams::default() };
        let config = SimConfig {
            total_steps:           6,
            seed:                  1,
            output_interval_steps: 2,
            stop_when_settled:     false,
        };
        let mut model = SchellingModel::with_config(params, config).unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        model.sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let vars = read_rows(dir.path().join("model_vars.csv"));
        assert_eq!(vars.len(), 6);
        for (i, row) in vars.iter().enumerate() {
            assert_eq!(row[0].parse::<usize>().unwrap(), i);
            assert_eq!(row[1].parse::<usize>().unwrap(), model.sim.history[i].happy);
        }

        // snapshots at steps 0, 2, 4 × 20 agents
        let snaps = read_rows(dir.path().join("agent_snapshots.csv"));
        assert_eq!(snaps.len(), 60);
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use schelling_agent::{Influence, Role};
    use tempfile::TempDir;

    use crate::row::{AgentSnapshotRow, ModelVarsRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_snapshot_roles() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let row = |agent_id: u32, role: Role| AgentSnapshotRow {
            agent_id, step: 1, x: 0, y: agent_id, group: 0, role, steps_since_move: 0,
        };
        w.write_snapshots(&[
            row(0, Role::Resident),
            row(1, Role::Influencer(Influence::Positive)),
            row(2, Role::Resident),
        ]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM agent_snapshots WHERE role = 'resident'", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(count, 2);
        let role: String = conn.query_row(
            "SELECT role FROM agent_snapshots WHERE agent_id = 1", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(role, "positive_influencer");
    }

    #[test]
    fn sqlite_model_vars() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_model_vars(&ModelVarsRow {
            step: 7, happy: 250, moved: 12, held: 3, hops: 1, failed_moves: 2,
        }).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (happy, moved, failed): (i64, i64, i64) = conn.query_row(
            "SELECT happy, moved, failed_moves FROM model_vars WHERE step = 7",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        ).unwrap();
        assert_eq!((happy, moved, failed), (250, 12, 2));
    }

    #[test]
    fn duplicate_step_reported_through_observer() {
        use schelling_core::Tick;
        use schelling_sim::{SimObserver, StepStats};

        use crate::observer::SimOutputObserver;

        let dir = tmp();
        let mut obs = SimOutputObserver::new(SqliteWriter::new(dir.path()).unwrap());
        obs.on_step_end(Tick(0), &StepStats::default());
        obs.on_step_end(Tick(0), &StepStats::default());
        assert!(obs.take_error().is_some());
        assert!(obs.take_error().is_none());
    }
}
