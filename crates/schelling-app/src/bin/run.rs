//! `run` — launch the visualization server with the default configuration.

use anyhow::Result;

use schelling_app::{AppConfig, init_tracing, serve};

fn main() -> Result<()> {
    init_tracing();
    serve(&AppConfig::load_or_default())?;
    Ok(())
}
