//! `schelling-sim` — step loop orchestrator for the Schelling influencer model.
//!
//! # Random-activation step loop
//!
//! ```text
//! for step in 0..config.total_steps:
//!   ① Reset     — zero the happy tally.
//!   ② Shuffle   — fresh activation order from the model RNG.
//!   ③ Activate  — for each agent in that order:
//!                   build SimContext over the current grid
//!                   BehaviorModel::step → intents
//!                   apply intents immediately:
//!                     Settle      → happy += 1
//!                     Hold        → stay
//!                     Relocate    → random empty cell (no-op if full)
//!                     Hop{r, n}   → n attempts at a random cell within r
//!   ④ Record    — push StepStats to history; stop if settled and asked to.
//! ```
//!
//! # Crate layout
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`params`]     | `ModelParams` — user-facing model parameters           |
//! | [`population`] | `populate` — initial grid and agents from parameters   |
//! | [`builder`]    | `SimBuilder`                                           |
//! | [`sim`]        | `Sim` and its step loop                                |
//! | [`stats`]      | `StepStats` per-step tallies                           |
//! | [`observer`]   | `SimObserver` hooks, `NoopObserver`                    |
//! | [`model`]      | `SchellingModel` — params → running model, with reset  |
//!
//! # Quick-start
//!
//! ```rust
//! use schelling_sim::{ModelParams, NoopObserver, SchellingModel};
//!
//! let mut model = SchellingModel::new(ModelParams::default()).unwrap();
//! model.sim.run_steps(5, &mut NoopObserver).unwrap();
//! assert_eq!(model.sim.history.len(), 5);
//! ```

pub mod builder;
pub mod error;
pub mod model;
pub mod observer;
pub mod params;
pub mod population;
pub mod sim;
pub mod stats;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use model::SchellingModel;
pub use observer::{NoopObserver, SimObserver};
pub use params::ModelParams;
pub use population::{Population, populate};
pub use sim::Sim;
pub use stats::StepStats;
