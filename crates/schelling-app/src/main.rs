//! `schelling` — serve the visualization or run the model headless.
//!
//! ```text
//! schelling                          # serve on 127.0.0.1:8521
//! schelling serve --addr 0.0.0.0:8080
//! schelling run --steps 500 --output output/run --seed 7
//! ```

use anyhow::{Context, Result};
use clap::Parser;

use schelling_app::{Cli, Command, init_tracing, run_headless, serve};

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.app_config().context("loading configuration")?;

    match cli.command() {
        Command::Serve(_) => serve(&config)?,
        Command::Run(_) => {
            let summary = run_headless(&config)?;
            println!("Steps       : {}", summary.steps);
            println!("Happy       : {} / {}", summary.happy, summary.residents);
            println!("Settled     : {}", if summary.settled { "yes" } else { "no" });
            println!("Output dir  : {}", summary.output_dir.display());
        }
    }
    Ok(())
}
