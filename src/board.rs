//! Board snapshots as delivered by the server.

use serde::{Deserialize, Serialize};

use crate::bitgrid::BitGrid;
use crate::geometry::Coordinate;

/// Revealed state of a single cell.
///
/// `Empty` never crosses the wire: snapshots list only non-empty cells
/// and absence means empty. `Ship` only ever appears on the owner's own
/// board; the opponent view stays masked to hits and misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Empty,
    Ship,
    HitShip,
    Miss,
}

/// One complete board snapshot.
///
/// Keeps the sparse cell list in the order the server sent it next to
/// bit masks for constant-time lookup. The diff engine relies on the
/// preserved order to identify the most recently touched cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: Vec<(Coordinate, CellState)>,
    ships: BitGrid,
    hits: BitGrid,
    misses: BitGrid,
}

impl Board {
    /// An all-empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from the wire cell list, preserving its order.
    pub fn from_cells(cells: Vec<(Coordinate, CellState)>) -> Self {
        let mut ships = BitGrid::new();
        let mut hits = BitGrid::new();
        let mut misses = BitGrid::new();
        for &(coordinate, state) in &cells {
            match state {
                CellState::Ship => ships.set(coordinate),
                CellState::HitShip => hits.set(coordinate),
                CellState::Miss => misses.set(coordinate),
                CellState::Empty => {}
            }
        }
        Self {
            cells,
            ships,
            hits,
            misses,
        }
    }

    /// Revealed state at `coordinate`. Hits shadow misses shadow intact
    /// ship cells should a malformed snapshot list a cell twice.
    pub fn cell(&self, coordinate: Coordinate) -> CellState {
        if self.hits.get(coordinate) {
            CellState::HitShip
        } else if self.misses.get(coordinate) {
            CellState::Miss
        } else if self.ships.get(coordinate) {
            CellState::Ship
        } else {
            CellState::Empty
        }
    }

    /// Non-empty cells in server delivery order.
    pub fn cells(&self) -> &[(Coordinate, CellState)] {
        &self.cells
    }

    /// Cells with an intact, unhit ship segment.
    pub fn ship_cells(&self) -> BitGrid {
        self.ships
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty() && self.hits.is_empty() && self.misses.is_empty()
    }
}
