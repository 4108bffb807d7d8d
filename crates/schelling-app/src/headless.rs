//! Runs the model to completion without a browser, writing output files.

use std::path::PathBuf;

use tracing::info;

use schelling_output::{CsvWriter, OutputWriter, SimOutputObserver};
use schelling_sim::SchellingModel;

use crate::config::{AppConfig, OutputFormat};
use crate::error::AppResult;

/// What a finished headless run did.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub steps:      u64,
    pub happy:      usize,
    pub residents:  usize,
    pub settled:    bool,
    pub output_dir: PathBuf,
}

/// Build the model from `config`, run it, and write output to
/// `config.run.output_dir`.
pub fn run_headless(config: &AppConfig) -> AppResult<RunSummary> {
    let mut model = SchellingModel::with_config(config.model.clone(), config.sim_config())?;
    let dir = &config.run.output_dir;

    match config.run.format {
        OutputFormat::Csv => drive(&mut model, CsvWriter::new(dir)?)?,
        OutputFormat::Sqlite => drive_sqlite(&mut model, config)?,
    }

    let summary = RunSummary {
        steps:      model.sim.tick.0,
        happy:      model.happy(),
        residents:  model.sim.agents.resident_count(),
        settled:    !model.sim.running,
        output_dir: dir.clone(),
    };
    info!(
        steps = summary.steps,
        happy = summary.happy,
        settled = summary.settled,
        dir = %summary.output_dir.display(),
        "headless run complete"
    );
    Ok(summary)
}

fn drive<W: OutputWriter>(model: &mut SchellingModel, writer: W) -> AppResult<()> {
    let mut observer = SimOutputObserver::new(writer);
    model.sim.run(&mut observer)?;
    match observer.take_error() {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

#[cfg(feature = "sqlite")]
fn drive_sqlite(model: &mut SchellingModel, config: &AppConfig) -> AppResult<()> {
    let writer = schelling_output::SqliteWriter::new(&config.run.output_dir)?;
    drive(model, writer)
}

#[cfg(not(feature = "sqlite"))]
fn drive_sqlite(_model: &mut SchellingModel, _config: &AppConfig) -> AppResult<()> {
    Err(crate::error::AppError::FeatureDisabled("sqlite"))
}
