//! `SingleGrid` — a rectangular grid where each cell holds at most one agent.
//!
//! # Storage
//!
//! Cells are stored row-major (`index = y * width + x`) as
//! `Option<AgentId>`.  Alongside, the grid keeps a dense `Vec<Pos>` of empty
//! cells plus a per-cell slot index into it, so "pick a uniformly random
//! empty cell" is O(1) and occupancy updates are O(1) swap-removes.
//!
//! The order of the empty list depends on the move history, which is itself
//! seed-determined, so random choices over it stay reproducible.

use schelling_core::{AgentId, AgentRng, Neighborhood, Pos};

use crate::{GridError, GridResult};

/// Largest grid `SingleGrid::new` accepts.  Cell indices fit in `u32`.
pub const MAX_CELLS: usize = 1 << 24;

/// Marks a cell that is not in the empty list.
const NOT_EMPTY: usize = usize::MAX;

#[derive(Clone, Debug)]
pub struct SingleGrid {
    width:      u32,
    height:     u32,
    torus:      bool,
    cells:      Vec<Option<AgentId>>,
    empties:    Vec<Pos>,
    empty_slot: Vec<usize>,
}

impl SingleGrid {
    /// Create an empty `width` × `height` grid.  With `torus = true` the
    /// edges wrap for neighborhood queries.
    pub fn new(width: u32, height: u32, torus: bool) -> GridResult<Self> {
        let n = width as usize * height as usize;
        if n == 0 || n > MAX_CELLS {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let mut empties = Vec::with_capacity(n);
        for y in 0..height {
            for x in 0..width {
                empties.push(Pos::new(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            torus,
            cells: vec![None; n],
            empties,
            empty_slot: (0..n).collect(),
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn torus(&self) -> bool {
        self.torus
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.y as usize * self.width as usize + pos.x as usize
    }

    fn checked_index(&self, pos: Pos) -> GridResult<usize> {
        if self.contains(pos) {
            Ok(self.index(pos))
        } else {
            Err(GridError::OutOfBounds(pos))
        }
    }

    // ── Occupancy queries ─────────────────────────────────────────────────

    /// The agent standing on `pos`, if any.  Out-of-bounds positions hold
    /// nobody.
    #[inline]
    pub fn agent_at(&self, pos: Pos) -> Option<AgentId> {
        if self.contains(pos) {
            self.cells[self.index(pos)]
        } else {
            None
        }
    }

    /// `true` only for in-bounds cells without an agent.
    #[inline]
    pub fn is_cell_empty(&self, pos: Pos) -> bool {
        self.contains(pos) && self.cells[self.index(pos)].is_none()
    }

    /// Unoccupied cells, in no particular order.
    pub fn empties(&self) -> &[Pos] {
        &self.empties
    }

    pub fn empty_count(&self) -> usize {
        self.empties.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.len() - self.empties.len()
    }

    /// Every cell in row-major order with its occupant.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Option<AgentId>)> + '_ {
        let w = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &a)| (Pos::new(i as u32 % w, i as u32 / w), a))
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Put `agent` on the empty cell `pos`.
    pub fn place_agent(&mut self, agent: AgentId, pos: Pos) -> GridResult<()> {
        let idx = self.checked_index(pos)?;
        if let Some(by) = self.cells[idx] {
            return Err(GridError::Occupied { pos, by });
        }
        self.cells[idx] = Some(agent);
        self.take_empty(idx);
        Ok(())
    }

    /// Clear `pos` and return the agent that stood there.
    pub fn remove_agent(&mut self, pos: Pos) -> GridResult<AgentId> {
        let idx = self.checked_index(pos)?;
        let agent = self.cells[idx].take().ok_or(GridError::EmptyCell(pos))?;
        self.give_empty(idx, pos);
        Ok(agent)
    }

    /// Move the agent on `from` to the empty cell `to`.
    ///
    /// On error the grid is unchanged.  Moving onto the same cell is rejected
    /// as `Occupied` since the target is not empty.
    pub fn move_agent(&mut self, from: Pos, to: Pos) -> GridResult<AgentId> {
        let from_idx = self.checked_index(from)?;
        let to_idx = self.checked_index(to)?;
        let agent = self.cells[from_idx].ok_or(GridError::EmptyCell(from))?;
        if let Some(by) = self.cells[to_idx] {
            return Err(GridError::Occupied { pos: to, by });
        }
        self.cells[from_idx] = None;
        self.give_empty(from_idx, from);
        self.cells[to_idx] = Some(agent);
        self.take_empty(to_idx);
        Ok(agent)
    }

    /// Move the agent on `from` to a uniformly random empty cell and return
    /// the new position.
    pub fn move_to_empty(&mut self, from: Pos, rng: &mut AgentRng) -> GridResult<Pos> {
        let to = *rng.choose(&self.empties).ok_or(GridError::NoEmptyCell)?;
        self.move_agent(from, to)?;
        Ok(to)
    }

    fn take_empty(&mut self, idx: usize) {
        let slot = self.empty_slot[idx];
        debug_assert_ne!(slot, NOT_EMPTY, "cell {idx} was not in the empty list");
        self.empties.swap_remove(slot);
        if let Some(&moved) = self.empties.get(slot) {
            let moved_idx = self.index(moved);
            self.empty_slot[moved_idx] = slot;
        }
        self.empty_slot[idx] = NOT_EMPTY;
    }

    fn give_empty(&mut self, idx: usize, pos: Pos) {
        debug_assert_eq!(self.empty_slot[idx], NOT_EMPTY);
        self.empty_slot[idx] = self.empties.len();
        self.empties.push(pos);
    }

    // ── Neighborhood queries ──────────────────────────────────────────────

    /// Positions within `radius` of `pos` under `kind`, in row-major offset
    /// order.
    ///
    /// On a bounded grid out-of-range cells are dropped, so edge and corner
    /// cells have smaller neighborhoods.  On a torus coordinates wrap and
    /// duplicates (radius larger than half the grid) are dropped; the center
    /// is excluded even when reached by wrapping unless `include_center`.
    pub fn neighborhood(
        &self,
        pos:            Pos,
        kind:           Neighborhood,
        include_center: bool,
        radius:         u32,
    ) -> Vec<Pos> {
        let r = radius as i64;
        let (w, h) = (self.width as i64, self.height as i64);
        let mut out = Vec::with_capacity(kind.size(radius) + 1);

        for dy in -r..=r {
            for dx in -r..=r {
                if !kind.contains_offset(dx, dy, radius) {
                    continue;
                }
                let (nx, ny) = (pos.x as i64 + dx, pos.y as i64 + dy);
                let cell = if self.torus {
                    Pos::new(nx.rem_euclid(w) as u32, ny.rem_euclid(h) as u32)
                } else if (0..w).contains(&nx) && (0..h).contains(&ny) {
                    Pos::new(nx as u32, ny as u32)
                } else {
                    continue;
                };
                if cell == pos && !include_center {
                    continue;
                }
                if self.torus && out.contains(&cell) {
                    continue;
                }
                out.push(cell);
            }
        }
        out
    }

    /// Agents occupying the neighborhood of `pos`.
    pub fn neighbors(
        &self,
        pos:            Pos,
        kind:           Neighborhood,
        include_center: bool,
        radius:         u32,
    ) -> Vec<AgentId> {
        self.neighborhood(pos, kind, include_center, radius)
            .into_iter()
            .filter_map(|p| self.agent_at(p))
            .collect()
    }
}
