//! Grid coordinates and neighborhood shapes.
//!
//! `x` runs along the grid width and `y` along its height; `(0, 0)` is the
//! bottom-left cell in the browser canvas (rows are drawn bottom-up) and the first cell in row-major
//! storage.

use std::fmt;

/// A cell coordinate on a 2D grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub x: u32,
    pub y: u32,
}

impl Pos {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// King-move distance: the smallest Moore radius that contains `other`.
    #[inline]
    pub fn chebyshev(self, other: Pos) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Rook-move distance: the smallest von Neumann radius that contains `other`.
    #[inline]
    pub fn manhattan(self, other: Pos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for Pos {
    fn from((x, y): (u32, u32)) -> Self {
        Pos { x, y }
    }
}

/// Which cells around a position count as its neighborhood.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Neighborhood {
    /// All eight surrounding cells (per unit of radius).
    #[default]
    Moore,
    /// The four orthogonally adjacent cells (per unit of radius).
    VonNeumann,
}

impl Neighborhood {
    /// `true` if the offset `(dx, dy)` lies inside a neighborhood of `radius`.
    #[inline]
    pub fn contains_offset(self, dx: i64, dy: i64, radius: u32) -> bool {
        let r = radius as i64;
        match self {
            Neighborhood::Moore      => dx.abs() <= r && dy.abs() <= r,
            Neighborhood::VonNeumann => dx.abs() + dy.abs() <= r,
        }
    }

    /// Number of cells in an unclipped neighborhood, excluding the center.
    pub fn size(self, radius: u32) -> usize {
        let r = radius as usize;
        match self {
            Neighborhood::Moore      => (2 * r + 1) * (2 * r + 1) - 1,
            Neighborhood::VonNeumann => 2 * r * (r + 1),
        }
    }
}
