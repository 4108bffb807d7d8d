//! `schelling-grid` — the board agents live on.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`grid`]  | `SingleGrid` (one agent per cell, O(1) random empty cell) |
//! | [`error`] | `GridError`, `GridResult<T>`                              |
//!
//! # Invariants
//!
//! - A cell holds at most one agent.
//! - Every move targets an empty, in-bounds cell; violations are errors and
//!   leave the grid untouched.
//! - The empty-cell list is exactly the set of unoccupied cells.

pub mod error;
pub mod grid;


pub use error::{GridError, GridResult};
pub use grid::{MAX_CELLS, SingleGrid};
