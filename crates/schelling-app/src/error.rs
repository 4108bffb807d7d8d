use std::path::PathBuf;

use thiserror::Error;

use schelling_output::OutputError;
use schelling_server::ServerError;
use schelling_sim::SimError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config {path}: {source}")]
    Parse {
        path:   PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("simulation error: {0}")]
    Sim(#[from] SimError),

    #[error("output error: {0}")]
    Output(#[from] OutputError),

    #[error("server error: {0}")]
    Server(#[from] ServerError),

    #[error("{0} output needs the `{0}` feature")]
    FeatureDisabled(&'static str),
}

pub type AppResult<T> = Result<T, AppError>;
