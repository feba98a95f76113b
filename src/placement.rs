//! Fleet placement validation and procedural generation.
//!
//! Placements are checked locally before anything is sent: the server
//! revalidates, but rejecting an illegal drop here keeps the feedback
//! immediate. Generation mirrors the drag-and-drop rules exactly.

use core::fmt;

use rand::Rng;

use crate::bitgrid::BitGrid;
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS};
use crate::geometry::{Coordinate, Orientation, Placement, ShipType};

/// Why a placement was rejected or generation gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Hull would leave the board.
    OutOfBounds,
    /// Hull intersects another placed ship.
    Overlaps,
    /// Random generation ran out of attempts.
    GenerationFailed,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Ship placement is out of bounds!"),
            PlacementError::Overlaps => write!(f, "Ship placement overlaps with another ship!"),
            PlacementError::GenerationFailed => {
                write!(f, "Failed to place all ships randomly. Please try again.")
            }
        }
    }
}

/// A player's fleet under construction: at most one placement per ship
/// class, pairwise disjoint, fully on the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    placements: Vec<Placement>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn get(&self, ship_type: ShipType) -> Option<&Placement> {
        self.placements.iter().find(|p| p.ship_type == ship_type)
    }

    /// Exactly one placement per ship class.
    pub fn is_complete(&self) -> bool {
        self.placements.len() == NUM_SHIPS
    }

    /// Union occupancy of every placed ship.
    pub fn occupied(&self) -> BitGrid {
        self.occupied_except(None)
    }

    fn occupied_except(&self, skip: Option<ShipType>) -> BitGrid {
        let mut grid = BitGrid::new();
        for placement in &self.placements {
            if Some(placement.ship_type) == skip {
                continue;
            }
            for cell in placement.occupied_cells() {
                grid.set(cell);
            }
        }
        grid
    }

    /// Check a candidate against the board edge and the rest of the
    /// fleet. A previous placement of the same ship class is excluded
    /// from the overlap check, so re-placing a ship cannot collide with
    /// itself.
    pub fn validate(&self, candidate: &Placement) -> Result<(), PlacementError> {
        if !candidate.in_bounds() {
            return Err(PlacementError::OutOfBounds);
        }
        let hull = BitGrid::from_cells(candidate.occupied_cells());
        if !(hull & self.occupied_except(Some(candidate.ship_type))).is_empty() {
            return Err(PlacementError::Overlaps);
        }
        Ok(())
    }

    /// Validate and insert, replacing any previous placement of the same
    /// ship class.
    pub fn place(&mut self, candidate: Placement) -> Result<(), PlacementError> {
        self.validate(&candidate)?;
        self.placements.retain(|p| p.ship_type != candidate.ship_type);
        self.placements.push(candidate);
        Ok(())
    }

    /// Take a ship off the board, e.g. when the user starts dragging it.
    pub fn remove(&mut self, ship_type: ShipType) -> Option<Placement> {
        let at = self
            .placements
            .iter()
            .position(|p| p.ship_type == ship_type)?;
        Some(self.placements.remove(at))
    }

    /// Random complete fleet on an otherwise empty board.
    pub fn generate<R: Rng>(rng: &mut R) -> Result<Self, PlacementError> {
        Self::generate_avoiding(rng, &BitGrid::new())
    }

    /// Random complete fleet leaving `blocked` cells untouched.
    ///
    /// Each ship gets up to [`MAX_PLACEMENT_ATTEMPTS`] draws: a coin
    /// flip for orientation, then a start cell drawn from ranges that
    /// keep the hull on the board by construction, so attempts are only
    /// ever spent on overlaps. When a ship runs out of attempts the
    /// whole generation fails; a partial fleet is never returned.
    /// Reproducible for a fixed RNG stream.
    pub fn generate_avoiding<R: Rng>(
        rng: &mut R,
        blocked: &BitGrid,
    ) -> Result<Self, PlacementError> {
        let mut fleet = Fleet::new();
        for ship_type in ShipType::ALL {
            let length = ship_type.length();
            let mut placed = false;
            for _ in 0..MAX_PLACEMENT_ATTEMPTS {
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                let (row, column) = match orientation {
                    Orientation::Horizontal => (
                        rng.random_range(0..BOARD_SIZE),
                        rng.random_range(0..=BOARD_SIZE - length),
                    ),
                    Orientation::Vertical => (
                        rng.random_range(length - 1..BOARD_SIZE),
                        rng.random_range(0..BOARD_SIZE),
                    ),
                };
                let candidate = Placement {
                    ship_type,
                    start_coordinate: Coordinate::new(row, column),
                    orientation,
                };
                let hull = BitGrid::from_cells(candidate.occupied_cells());
                if !(hull & *blocked).is_empty() {
                    continue;
                }
                if fleet.place(candidate).is_ok() {
                    placed = true;
                    break;
                }
            }
            if !placed {
                return Err(PlacementError::GenerationFailed);
            }
        }
        Ok(fleet)
    }
}

/// Flip a placement's orientation around its unchanged start coordinate.
/// Rejected when the flipped hull would leave the board; whether it
/// overlaps another ship is for [`Fleet::place`] to decide.
pub fn rotate(placement: &Placement) -> Result<Placement, PlacementError> {
    let rotated = Placement {
        orientation: placement.orientation.flipped(),
        ..*placement
    };
    if !rotated.in_bounds() {
        return Err(PlacementError::OutOfBounds);
    }
    Ok(rotated)
}
