//! `schelling-agent` — Structure-of-Arrays agent storage.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`role`]    | `Role`, `Influence`, `AgentSpec`                          |
//! | [`store`]   | `AgentStore` (SoA arrays), `AgentRngs` (per-agent RNG)    |
//! | [`builder`] | `AgentStoreBuilder` (fluent construction)                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Role`, `Influence`, `AgentSpec`. |

pub mod builder;
pub mod role;
pub mod store;


pub use builder::AgentStoreBuilder;
pub use role::{AgentSpec, Influence, Role};
pub use store::{AgentRngs, AgentStore};
