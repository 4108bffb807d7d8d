//! `AppConfig`: the `schelling.toml` file.
//!
//! ```toml
//! [model]
//! density   = 0.7
//! homophily = 4
//! seed      = 7
//!
//! [server]
//! addr = "0.0.0.0:8521"
//!
//! [run]
//! steps      = 200
//! output_dir = "output/run"
//! ```
//!
//! Every table and every key is optional; missing ones take their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use schelling_core::SimConfig;
use schelling_server::ServerConfig;
use schelling_sim::ModelParams;

use crate::error::{ConfigError, ConfigResult};

/// Default config file, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "schelling.toml";

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub model:  ModelParams,
    pub server: ServerConfig,
    pub run:    RunConfig,
}

/// Headless run settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Steps to execute (fewer if the model settles and `stop_when_settled`).
    pub steps:             u64,
    pub output_dir:        PathBuf,
    /// Agent snapshot every N steps; 0 disables snapshots.
    pub snapshot_interval: u64,
    pub stop_when_settled: bool,
    pub format:            OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            steps:             100,
            output_dir:        PathBuf::from("output"),
            snapshot_interval: 10,
            stop_when_settled: false,
            format:            OutputFormat::Csv,
        }
    }
}

/// Output backend for headless runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    /// Requires the `sqlite` feature.
    Sqlite,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        toml::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Load [`DEFAULT_CONFIG_PATH`], or use defaults if it is missing or
    /// unreadable.
    pub fn load_or_default() -> Self {
        if !Path::new(DEFAULT_CONFIG_PATH).exists() {
            debug!(path = DEFAULT_CONFIG_PATH, "no config file; using defaults");
            return Self::default();
        }
        Self::load(DEFAULT_CONFIG_PATH).unwrap_or_else(|e| {
            warn!(error = %e, "could not load config; using defaults");
            Self::default()
        })
    }

    /// An explicit path must load; without one, fall back to
    /// [`load_or_default`][Self::load_or_default].
    pub fn resolve(explicit: Option<&Path>) -> ConfigResult<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Ok(Self::load_or_default()),
        }
    }

    /// Step-loop settings for a headless run.
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            total_steps:           self.run.steps,
            seed:                  self.model.seed,
            output_interval_steps: self.run.snapshot_interval,
            stop_when_settled:     self.run.stop_when_settled,
        }
    }
}
