//! `schelling-core` — foundational types for the Schelling influencer model.
//!
//! This crate is a dependency of every other `schelling-*` crate.  It has no
//! workspace dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                |
//! |-----------|---------------------------------------------------------|
//! | [`ids`]   | `AgentId`, `GroupId`                                    |
//! | [`pos`]   | `Pos`, `Neighborhood`                                   |
//! | [`time`]  | `Tick`, `SimConfig`                                     |
//! | [`rng`]   | `AgentRng` (per-agent), `SimRng` (model-level)          |
//! | [`error`] | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod error;
pub mod ids;
pub mod pos;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, GroupId};
pub use pos::{Neighborhood, Pos};
pub use rng::{AgentRng, SimRng};
pub use time::{SimConfig, Tick};
