//! JSON snapshot of the live model sent to the page after every request.

use serde::Serialize;

use schelling_sim::{SchellingModel, StepStats};

use crate::portrayal::{Portrayal, portray_all};

/// Everything the page needs to redraw.
#[derive(Clone, Debug, Serialize)]
pub struct ModelState {
    /// Steps executed since the last reset.
    pub step:    u64,
    pub happy:   usize,
    pub running: bool,
    pub width:   u32,
    pub height:  u32,
    /// The text element shown under the canvas.
    pub text:    String,
    pub agents:  Vec<Portrayal>,
    /// Tallies of the last step, if any.
    pub last:    Option<StepStats>,
}

impl ModelState {
    pub fn capture(model: &SchellingModel) -> Self {
        let sim = &model.sim;
        let happy = model.happy();
        Self {
            step:    sim.tick.0,
            happy,
            running: sim.running,
            width:   sim.grid.width(),
            height:  sim.grid.height(),
            text:    happy_text(happy),
            agents:  portray_all(&sim.agents),
            last:    sim.history.last().copied(),
        }
    }
}

pub fn happy_text(happy: usize) -> String {
    format!("Happy agents: {happy}")
}
