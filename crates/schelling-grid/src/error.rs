//! Grid error type.

use thiserror::Error;

use schelling_core::{AgentId, Pos};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must be non-empty and at most {} cells (got {width}x{height})", crate::MAX_CELLS)]
    InvalidDimensions { width: u32, height: u32 },

    #[error("position {0} is outside the grid")]
    OutOfBounds(Pos),

    #[error("cell {pos} is already occupied by {by}")]
    Occupied { pos: Pos, by: AgentId },

    #[error("cell {0} holds no agent")]
    EmptyCell(Pos),

    #[error("no empty cell left on the grid")]
    NoEmptyCell,
}

pub type GridResult<T> = Result<T, GridError>;
