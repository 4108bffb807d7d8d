//! Command-line arguments.  Flags override values from the config file.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{AppConfig, OutputFormat};
use crate::error::ConfigResult;

#[derive(Debug, Parser)]
#[command(name = "schelling")]
#[command(about = "Schelling segregation model with social influencers")]
pub struct Cli {
    /// TOML config file [default: schelling.toml if present]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Serve the browser visualization (the default)
    Serve(ServeArgs),
    /// Run without a browser and write per-step output files
    Run(RunArgs),
}

#[derive(Clone, Debug, Default, Args)]
pub struct ServeArgs {
    /// Address to listen on, e.g. 127.0.0.1:8521
    #[arg(long)]
    pub addr: Option<String>,

    /// Seed for the initial board
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, Default, Args)]
pub struct RunArgs {
    /// Steps to execute
    #[arg(long)]
    pub steps: Option<u64>,

    /// Directory for output files
    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Agent snapshot every N steps (0 disables)
    #[arg(long)]
    pub snapshot_interval: Option<u64>,

    /// Stop as soon as every resident is happy
    #[arg(long)]
    pub stop_when_settled: bool,

    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    #[arg(long)]
    pub density: Option<f64>,

    #[arg(long)]
    pub minority_pc: Option<f64>,

    #[arg(long)]
    pub homophily: Option<u8>,

    /// Wrap neighborhoods around the grid edges
    #[arg(long)]
    pub torus: bool,
}

impl Cli {
    /// The subcommand to execute; `serve` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or_else(|| Command::Serve(ServeArgs::default()))
    }

    /// Load the config file and apply this command's flags on top.
    pub fn app_config(&self) -> ConfigResult<AppConfig> {
        let mut config = AppConfig::resolve(self.config.as_deref())?;
        match &self.command() {
            Command::Serve(args) => args.apply(&mut config),
            Command::Run(args) => args.apply(&mut config),
        }
        Ok(config)
    }
}

impl ServeArgs {
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(addr) = &self.addr {
            config.server.addr = addr.clone();
        }
        if let Some(seed) = self.seed {
            config.model.seed = seed;
        }
    }
}

impl RunArgs {
    pub fn apply(&self, config: &mut AppConfig) {
        let run = &mut config.run;
        if let Some(steps) = self.steps {
            run.steps = steps;
        }
        if let Some(dir) = &self.output {
            run.output_dir = dir.clone();
        }
        if let Some(format) = self.format {
            run.format = format;
        }
        if let Some(n) = self.snapshot_interval {
            run.snapshot_interval = n;
        }
        run.stop_when_settled |= self.stop_when_settled;

        let model = &mut config.model;
        if let Some(seed) = self.seed {
            model.seed = seed;
        }
        if let Some(width) = self.width {
            model.width = width;
        }
        if let Some(height) = self.height {
            model.height = height;
        }
        if let Some(density) = self.density {
            model.density = density;
        }
        if let Some(pc) = self.minority_pc {
            model.minority_pc = pc;
        }
        if let Some(h) = self.homophily {
            model.homophily = h;
        }
        model.torus |= self.torus;
    }
}
