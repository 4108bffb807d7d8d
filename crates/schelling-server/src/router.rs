//! Request routing, independent of the socket layer.
//!
//! | Method | Path                        | Reply                                  |
//! |--------|-----------------------------|----------------------------------------|
//! | GET    | `/`, `/index.html`          | the canvas page                        |
//! | GET    | `/api/params`               | sliders, title, canvas and grid size   |
//! | GET    | `/api/state`                | [`ModelState`]                         |
//! | POST   | `/api/step?steps=n`         | run up to `n` steps, then state        |
//! | POST   | `/api/reset?<param>=<v>&…`  | rebuild with new parameters, then state|
//!
//! A reset without `seed=` draws a fresh seed, so each press of Reset on the
//! page gives a new board; `seed=` replays a particular one.
//!
//! Any other path is 404; a known path with the wrong method is 405.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use tiny_http::Method;
use tracing::{debug, info, warn};

use schelling_sim::{ModelParams, SchellingModel};

use crate::params::{UserParam, params_from_query, user_params};
use crate::state::ModelState;
use crate::{ServerConfig, ServerError, ServerResult};

/// The one live model, shared by every request.
pub type SharedModel = Arc<Mutex<SchellingModel>>;

/// Most steps a single `/api/step` request may ask for.
pub const MAX_STEPS_PER_REQUEST: u64 = 1_000;

const PAGE_TEMPLATE: &str = include_str!("../assets/index.html");

/// A fully formed response body with its status and content type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub status:       u16,
    pub content_type: &'static str,
    pub body:         String,
}

impl Reply {
    fn json<T: Serialize>(value: &T) -> ServerResult<Self> {
        Ok(Self {
            status:       200,
            content_type: "application/json",
            body:         serde_json::to_string(value)?,
        })
    }

    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            content_type: "application/json",
            body:         serde_json::json!({ "error": message }).to_string(),
        }
    }
}

#[derive(Serialize)]
struct ParamsReply<'a> {
    title:         &'a str,
    canvas_width:  u32,
    canvas_height: u32,
    grid_width:    u32,
    grid_height:   u32,
    params:        Vec<UserParam>,
    current:       &'a ModelParams,
}

/// Maps requests onto the shared model.
#[derive(Clone)]
pub struct Router {
    model:  SharedModel,
    config: ServerConfig,
}

impl Router {
    pub fn new(config: ServerConfig, model: SharedModel) -> Self {
        Self { model, config }
    }

    pub fn model(&self) -> &SharedModel {
        &self.model
    }

    /// Route one request.  `url` is the request target, query included.
    pub fn handle(&self, method: &Method, url: &str) -> Reply {
        let (path, query) = url.split_once('?').unwrap_or((url, ""));

        let result = match (method, path) {
            (Method::Get, "/" | "/index.html") => Ok(self.page()),
            (Method::Get, "/api/params") => self.params(),
            (Method::Get, "/api/state") => self.state(),
            (Method::Post, "/api/step") => self.step(query),
            (Method::Post, "/api/reset") => self.reset(query),
            (_, "/" | "/index.html" | "/api/params" | "/api/state" | "/api/step" | "/api/reset") => {
                return Reply::error(405, &format!("{method} not allowed on {path}"));
            }
            _ => return Reply::error(404, &format!("no route for {path}")),
        };

        result.unwrap_or_else(|e| {
            let status = e.status();
            if status >= 500 {
                warn!(%method, %path, error = %e, "request failed");
            } else {
                debug!(%method, %path, error = %e, "request rejected");
            }
            Reply::error(status, &e.to_string())
        })
    }

    // ── Handlers ──────────────────────────────────────────────────────────

    fn page(&self) -> Reply {
        let body = PAGE_TEMPLATE
            .replace("__TITLE__", &self.config.title)
            .replace("__CANVAS_WIDTH__", &self.config.canvas_width.to_string())
            .replace("__CANVAS_HEIGHT__", &self.config.canvas_height.to_string());
        Reply { status: 200, content_type: "text/html; charset=utf-8", body }
    }

    fn params(&self) -> ServerResult<Reply> {
        let model = self.lock()?;
        Reply::json(&ParamsReply {
            title:         &self.config.title,
            canvas_width:  self.config.canvas_width,
            canvas_height: self.config.canvas_height,
            grid_width:    model.params.width,
            grid_height:   model.params.height,
            params:        user_params(),
            current:       &model.params,
        })
    }

    fn state(&self) -> ServerResult<Reply> {
        let model = self.lock()?;
        Reply::json(&ModelState::capture(&model))
    }

    fn step(&self, query: &str) -> ServerResult<Reply> {
        let steps = parse_steps(query)?;
        let mut model = self.lock()?;
        for _ in 0..steps {
            if !model.sim.running {
                break;
            }
            model.sim.step()?;
        }
        debug!(tick = %model.sim.tick, happy = model.happy(), "stepped");
        Reply::json(&ModelState::capture(&model))
    }

    fn reset(&self, query: &str) -> ServerResult<Reply> {
        let mut model = self.lock()?;
        let mut params = params_from_query(query, &model.params)?;
        if !has_seed(query) {
            params.seed = rand::random();
        }
        model.reset_with(params)?;
        info!(agents = model.sim.agents.count, seed = model.params.seed, "model reset from page");
        Reply::json(&ModelState::capture(&model))
    }

    fn lock(&self) -> ServerResult<MutexGuard<'_, SchellingModel>> {
        self.model.lock().map_err(|_| ServerError::Poisoned)
    }
}

fn has_seed(query: &str) -> bool {
    query.split('&').any(|pair| pair.split_once('=').map_or(pair, |(k, _)| k) == "seed")
}

/// `steps=n` from a query string; defaults to 1.
fn parse_steps(query: &str) -> ServerResult<u64> {
    let mut steps = 1;
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        match pair.split_once('=') {
            Some(("steps", raw)) => {
                steps = raw
                    .parse()
                    .map_err(|_| ServerError::BadRequest(format!("steps {raw:?} is not an integer")))?;
            }
            _ => return Err(ServerError::BadRequest(format!("unexpected query {pair:?}"))),
        }
    }
    if !(1..=MAX_STEPS_PER_REQUEST).contains(&steps) {
        return Err(ServerError::BadRequest(format!(
            "steps must be between 1 and {MAX_STEPS_PER_REQUEST}"
        )));
    }
    Ok(steps)
}
