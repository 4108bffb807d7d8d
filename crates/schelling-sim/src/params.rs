//! User-facing model parameters.

use serde::{Deserialize, Serialize};

use schelling_grid::MAX_CELLS;

use crate::{SimError, SimResult};

/// Largest like-resident requirement a radius-1 Moore neighborhood can meet.
pub const MAX_HOMOPHILY: u8 = 8;

/// An influencer's count is `similar + majority`, so a majority-group
/// influencer surrounded by majority agents scores twice the neighborhood.
pub const MAX_INFLUENCER_TOLERANCE: u8 = 2 * MAX_HOMOPHILY;

/// Everything needed to build a model.
///
/// Missing fields in a TOML table or query string fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelParams {
    pub height: u32,
    pub width:  u32,

    /// Probability that a cell starts occupied.
    pub density: f64,

    /// Probability that a placed agent belongs to the minority group.
    pub minority_pc: f64,

    /// Like-resident neighbors a resident needs to be happy.
    pub homophily: u8,

    /// Number of positive influencers.
    pub num_type1:            u32,
    pub tolerance_rate_type1: u8,

    /// Number of negative influencers.
    pub num_type2:            u32,
    pub tolerance_rate_type2: u8,

    /// Wrap neighborhoods around the grid edges.
    pub torus: bool,

    pub seed: u64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            height:               20,
            width:                20,
            density:              0.8,
            minority_pc:          0.2,
            homophily:            3,
            num_type1:            1,
            tolerance_rate_type1: 8,
            num_type2:            1,
            tolerance_rate_type2: 2,
            torus:                false,
            seed:                 42,
        }
    }
}

impl ModelParams {
    pub fn validate(&self) -> SimResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SimError::Config(format!(
                "grid must be at least 1x1 (got {}x{})",
                self.width, self.height
            )));
        }
        if self.cell_count() > MAX_CELLS {
            return Err(SimError::Config(format!(
                "grid {}x{} exceeds {MAX_CELLS} cells",
                self.width, self.height
            )));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(SimError::Config(format!("density {} is not in [0, 1]", self.density)));
        }
        if !(0.0..=1.0).contains(&self.minority_pc) {
            return Err(SimError::Config(format!(
                "minority_pc {} is not in [0, 1]",
                self.minority_pc
            )));
        }
        if self.homophily > MAX_HOMOPHILY {
            return Err(SimError::Config(format!(
                "homophily {} exceeds {MAX_HOMOPHILY}",
                self.homophily
            )));
        }
        for (name, value) in [
            ("tolerance_rate_type1", self.tolerance_rate_type1),
            ("tolerance_rate_type2", self.tolerance_rate_type2),
        ] {
            if value > MAX_INFLUENCER_TOLERANCE {
                return Err(SimError::Config(format!(
                    "{name} {value} exceeds {MAX_INFLUENCER_TOLERANCE}"
                )));
            }
        }
        Ok(())
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
