//! `schelling-app` — the `schelling` and `run` binaries.
//!
//! `schelling serve` (the default) opens the browser visualization;
//! `schelling run` executes the model headless and writes
//! `model_vars.csv` / `agent_snapshots.csv` (or `output.db`).  The `run`
//! binary is shorthand for `schelling serve` with the default config.
//!
//! | Module       | Contents                                           |
//! |--------------|----------------------------------------------------|
//! | [`config`]   | `AppConfig` (`schelling.toml`), `RunConfig`        |
//! | [`cli`]      | clap arguments and flag overrides                  |
//! | [`headless`] | `run_headless`, `RunSummary`                       |
//! | [`error`]    | `ConfigError`, `AppError`                          |
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

pub mod cli;
pub mod config;
pub mod error;
pub mod headless;


pub use cli::{Cli, Command, RunArgs, ServeArgs};
pub use config::{AppConfig, DEFAULT_CONFIG_PATH, OutputFormat, RunConfig};
pub use error::{AppError, AppResult, ConfigError, ConfigResult};
pub use headless::{RunSummary, run_headless};

use tracing::info;
use tracing_subscriber::EnvFilter;

use schelling_server::{VizServer, initial_model};

/// Install the global `tracing` subscriber.  Safe to call more than once.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Bind the visualization server and serve until the listener fails.
///
/// Slider-controlled parameters start at their slider values; grid size,
/// torus and seed come from `config.model`.
pub fn serve(config: &AppConfig) -> AppResult<()> {
    let model = initial_model(&config.model)?;
    let server = VizServer::bind(config.server.clone(), model)?;
    if let Some(addr) = server.local_addr() {
        info!("open http://{addr}/ in a browser");
    }
    server.serve_forever()?;
    Ok(())
}
