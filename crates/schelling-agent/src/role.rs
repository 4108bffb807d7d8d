//! What kind of agent something is.

use schelling_core::{GroupId, Pos};

/// Direction in which an influencer sways unhappy residents around it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Influence {
    /// Unhappy residents next to it stay put.
    Positive,
    /// Unhappy residents next to it make short random hops instead of
    /// relocating across the grid.
    Negative,
}

impl Influence {
    pub fn as_str(self) -> &'static str {
        match self {
            Influence::Positive => "positive",
            Influence::Negative => "negative",
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Role {
    #[default]
    Resident,
    Influencer(Influence),
}

impl Role {
    #[inline]
    pub fn is_influencer(self) -> bool {
        matches!(self, Role::Influencer(_))
    }

    #[inline]
    pub fn influence(self) -> Option<Influence> {
        match self {
            Role::Resident => None,
            Role::Influencer(i) => Some(i),
        }
    }

    /// Label used in CSV columns and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Resident => "resident",
            Role::Influencer(Influence::Positive) => "positive_influencer",
            Role::Influencer(Influence::Negative) => "negative_influencer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to create one agent.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSpec {
    pub group:     GroupId,
    pub role:      Role,
    /// Influencers relocate when `similar + majority` neighbors fall below
    /// this.  Residents ignore it (their threshold is the model homophily).
    pub tolerance: u8,
    pub pos:       Pos,
}

impl AgentSpec {
    pub fn resident(group: GroupId, pos: Pos) -> Self {
        Self { group, role: Role::Resident, tolerance: 0, pos }
    }

    pub fn influencer(group: GroupId, influence: Influence, tolerance: u8, pos: Pos) -> Self {
        Self { group, role: Role::Influencer(influence), tolerance, pos }
    }
}
