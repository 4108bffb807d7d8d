//! Error types for schelling-server.

use schelling_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("cannot listen on {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("model error: {0}")]
    Sim(#[from] SimError),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("model lock poisoned by a panicking request")]
    Poisoned,
}

impl ServerError {
    /// HTTP status code reported to the client.
    pub fn status(&self) -> u16 {
        match self {
            ServerError::BadRequest(_) | ServerError::Sim(SimError::Config(_)) => 400,
            _ => 500,
        }
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
