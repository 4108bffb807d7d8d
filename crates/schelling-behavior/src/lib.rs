//! `schelling-behavior` — agent behavior model trait and intent types.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`intent`]    | `Intent` enum (`Settle`, `Hold`, `Relocate`, `Hop`)           |
//! | [`context`]   | `SimContext<'a>` — read-only view of grid and agents          |
//! | [`model`]     | `BehaviorModel` trait                                         |
//! | [`schelling`] | `SchellingBehavior` — homophily plus influencer rules         |
//! | [`noop`]      | `NoopBehavior` — placeholder that never produces intents      |
//! | [`error`]     | `BehaviorError`, `BehaviorResult<T>`                          |
//!
//! # Design notes
//!
//! Agents are activated one at a time in random order.  For each agent the
//! sim builds a `SimContext` over the *current* grid, asks the behavior for
//! intents, and applies them before the next agent is asked, so every agent
//! sees the moves made earlier in the same step.  Behavior models therefore
//! never mutate anything themselves; they only describe what should happen.

pub mod context;
pub mod error;
pub mod intent;
pub mod model;
pub mod noop;
pub mod schelling;


pub use context::SimContext;
pub use error::{BehaviorError, BehaviorResult};
pub use intent::Intent;
pub use model::BehaviorModel;
pub use noop::NoopBehavior;
pub use schelling::{NeighborCounts, SchellingBehavior};
