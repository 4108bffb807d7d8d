//! `schelling-server` — browser visualization for the Schelling influencer
//! model.
//!
//! The page draws the grid on a canvas, shows the happy-agent count, and
//! offers sliders for the model parameters.  It talks to a small JSON API
//! served by [`VizServer`]; all requests share one model behind a mutex.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`portrayal`] | per-agent shape and colour                            |
//! | [`params`]    | `UserParam` sliders and query-string parsing          |
//! | [`state`]     | `ModelState` JSON snapshot                            |
//! | [`router`]    | `Router` — method/path → `Reply`, no sockets involved |
//! | [`server`]    | `VizServer`, `ServerConfig`                           |
//! | [`error`]     | `ServerError`, `ServerResult<T>`                      |

pub mod error;
pub mod params;
pub mod portrayal;
pub mod router;
pub mod server;
pub mod state;


pub use error::{ServerError, ServerResult};
pub use params::{UserParam, params_from_query, slider_defaults, user_params};
pub use portrayal::{Portrayal, Shape, portray, portray_all};
pub use router::{Reply, Router, SharedModel};
pub use server::{DEFAULT_ADDR, DEFAULT_TITLE, ServerConfig, VizServer};
pub use state::{ModelState, happy_text};

use std::sync::{Arc, Mutex};

use schelling_sim::{ModelParams, SchellingModel};

/// Build the model the page starts with: `base` with every slider at its
/// initial value, wrapped for sharing.
pub fn initial_model(base: &ModelParams) -> ServerResult<SharedModel> {
    let model = SchellingModel::new(slider_defaults(base))?;
    Ok(Arc::new(Mutex::new(model)))
}
