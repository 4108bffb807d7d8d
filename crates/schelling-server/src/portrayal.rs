//! How each agent is drawn on the canvas grid.
//!
//! | Agent                    | Shape              | Fill      | Stroke    |
//! |--------------------------|--------------------|-----------|-----------|
//! | resident, group 0        | circle `r = 0.5`   | `#808080` | `#FFFFFF` |
//! | resident, group 1        | circle `r = 0.5`   | `#0000FF` | `#FFFFFF` |
//! | positive influencer      | rect `0.8 × 0.8`   | `#FFA500` | `#000000` |
//! | negative influencer      | rect `0.8 × 0.8`   | `#FF0000` | `#000000` |
//!
//! Field names follow the canvas-grid portrayal keys the page script reads
//! (`Shape`, `Color`, `stroke_color`, `Filled`, `Layer`, `r`, `w`, `h`).

use serde::Serialize;

use schelling_agent::{AgentStore, Influence, Role};
use schelling_core::AgentId;

pub const MAJORITY_COLOR: &str = "#808080";
pub const MINORITY_COLOR: &str = "#0000FF";
pub const POSITIVE_COLOR: &str = "#FFA500";
pub const NEGATIVE_COLOR: &str = "#FF0000";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Rect,
}

/// One drawable agent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Portrayal {
    #[serde(rename = "Shape")]
    pub shape: Shape,
    #[serde(rename = "Color")]
    pub color: &'static str,
    pub stroke_color: &'static str,
    #[serde(rename = "Filled")]
    pub filled: bool,
    #[serde(rename = "Layer")]
    pub layer: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<f32>,
    pub x: u32,
    pub y: u32,
}

/// Portrayal of a single agent.
pub fn portray(agents: &AgentStore, agent: AgentId) -> Portrayal {
    let i = agent.index();
    let pos = agents.pos[i];
    let base = Portrayal {
        shape:        Shape::Circle,
        color:        MAJORITY_COLOR,
        stroke_color: "#FFFFFF",
        filled:       true,
        layer:        0,
        r:            Some(0.5),
        w:            None,
        h:            None,
        x:            pos.x,
        y:            pos.y,
    };

    match agents.role[i] {
        Role::Resident => Portrayal {
            color: if agents.group[i].is_minority() { MINORITY_COLOR } else { MAJORITY_COLOR },
            ..base
        },
        Role::Influencer(influence) => Portrayal {
            shape:        Shape::Rect,
            color:        match influence {
                Influence::Positive => POSITIVE_COLOR,
                Influence::Negative => NEGATIVE_COLOR,
            },
            stroke_color: "#000000",
            r:            None,
            w:            Some(0.8),
            h:            Some(0.8),
            ..base
        },
    }
}

/// Portrayals of every agent, in `AgentId` order.
pub fn portray_all(agents: &AgentStore) -> Vec<Portrayal> {
    agents.agent_ids().map(|a| portray(agents, a)).collect()
}
