//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` where a core
//! failure can cross their boundary.

use thiserror::Error;

use crate::{AgentId, Pos};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("position {0} is outside the grid")]
    OutOfBounds(Pos),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `schelling-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
