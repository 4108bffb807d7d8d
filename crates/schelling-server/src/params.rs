//! User-adjustable model parameters (the sliders beside the canvas).

use serde::Serialize;

use schelling_sim::ModelParams;

use crate::{ServerError, ServerResult};

/// A slider the page renders and sends back on reset.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UserParam {
    /// Query-string key and `ModelParams` field name.
    pub name:  &'static str,
    pub label: &'static str,
    pub value: f64,
    pub min:   f64,
    pub max:   f64,
    pub step:  f64,
}

impl UserParam {
    const fn slider(
        name:  &'static str,
        label: &'static str,
        value: f64,
        min:   f64,
        max:   f64,
        step:  f64,
    ) -> Self {
        Self { name, label, value, min, max, step }
    }

    pub fn contains(&self, v: f64) -> bool {
        (self.min..=self.max).contains(&v)
    }
}

/// The sliders, in display order.
pub fn user_params() -> Vec<UserParam> {
    vec![
        UserParam::slider("density", "Agent Density", 0.3, 0.1, 1.0, 0.05),
        UserParam::slider("minority_pc", "Minority Percentage", 0.2, 0.0, 0.5, 0.05),
        UserParam::slider("homophily", "Homophily", 3.0, 0.0, 8.0, 1.0),
        UserParam::slider("num_type1", "Number of Type 1 Influencers", 1.0, 0.0, 10.0, 1.0),
        UserParam::slider("tolerance_rate_type1", "Tolerance Rate Type 1", 1.0, 0.0, 10.0, 1.0),
        UserParam::slider("num_type2", "Number of Type 2 Influencers", 1.0, 0.0, 10.0, 1.0),
        UserParam::slider("tolerance_rate_type2", "Tolerance Rate Type 2", 6.0, 0.0, 8.0, 1.0),
    ]
}

/// `base` with every slider at its initial value.
pub fn slider_defaults(base: &ModelParams) -> ModelParams {
    let mut params = base.clone();
    for p in user_params() {
        set_param(&mut params, p.name, p.value);
    }
    params
}

/// Apply `key=value` pairs from a query string on top of `base`.
///
/// Slider keys must lie within their slider's range; `seed` is accepted as
/// any `u64`.  Unknown keys and malformed numbers are rejected.
pub fn params_from_query(query: &str, base: &ModelParams) -> ServerResult<ModelParams> {
    let sliders = user_params();
    let mut params = base.clone();

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));

        if key == "seed" {
            params.seed = raw
                .parse()
                .map_err(|_| ServerError::BadRequest(format!("seed {raw:?} is not an integer")))?;
            continue;
        }

        let slider = sliders
            .iter()
            .find(|s| s.name == key)
            .ok_or_else(|| ServerError::BadRequest(format!("unknown parameter {key:?}")))?;
        let value: f64 = raw
            .parse()
            .map_err(|_| ServerError::BadRequest(format!("{key} {raw:?} is not a number")))?;
        if !value.is_finite() || !slider.contains(value) {
            return Err(ServerError::BadRequest(format!(
                "{key} {value} outside [{}, {}]",
                slider.min, slider.max
            )));
        }
        set_param(&mut params, slider.name, value);
    }
    Ok(params)
}

/// Non-slider keys are ignored.
fn set_param(params: &mut ModelParams, key: &str, value: f64) {
    match key {
        "density"              => params.density = value,
        "minority_pc"          => params.minority_pc = value,
        "homophily"            => params.homophily = value.round() as u8,
        "num_type1"            => params.num_type1 = value.round() as u32,
        "tolerance_rate_type1" => params.tolerance_rate_type1 = value.round() as u8,
        "num_type2"            => params.num_type2 = value.round() as u32,
        "tolerance_rate_type2" => params.tolerance_rate_type2 = value.round() as u8,
        _ => {}
    }
}
