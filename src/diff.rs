//! Snapshot delta detection.
//!
//! The server resends complete board state on every move, so hit/miss
//! feedback and strike animations are driven by comparing successive
//! snapshots rather than by dedicated events. The functions here report
//! what changed; the session decides what to do with it.

use std::collections::HashMap;

use crate::bitgrid::BitGrid;
use crate::board::Board;
use crate::geometry::{Coordinate, ShipType};

/// Cells whose revealed state differs between two snapshots.
///
/// Results follow the current snapshot's cell order, with cells only
/// present in the previous snapshot appended last, so the final element
/// is the cell the server touched most recently. `previous = None`
/// means no snapshot has been seen yet and the result is empty: the
/// first snapshot of a session produces no feedback even when it
/// already covers many moves.
pub fn diff(previous: Option<&Board>, current: &Board) -> Vec<Coordinate> {
    let Some(previous) = previous else {
        return Vec::new();
    };
    let mut changed = Vec::new();
    let mut visited = BitGrid::new();
    for &(coordinate, _) in current.cells() {
        if visited.get(coordinate) {
            continue;
        }
        visited.set(coordinate);
        if previous.cell(coordinate) != current.cell(coordinate) {
            changed.push(coordinate);
        }
    }
    for &(coordinate, _) in previous.cells() {
        if visited.get(coordinate) {
            continue;
        }
        visited.set(coordinate);
        if previous.cell(coordinate) != current.cell(coordinate) {
            changed.push(coordinate);
        }
    }
    changed
}

/// Tracks per-player sunk-ship lists across room observations and
/// reports ships that sank since the previous look.
///
/// The first observation for a player only primes the tracker, so ships
/// already sunk before the client attached never trigger feedback.
#[derive(Debug, Default)]
pub struct SunkShipTracker {
    seen: HashMap<String, Vec<ShipType>>,
}

impl SunkShipTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current sunk-ship list for `player` and return the
    /// ships that are new relative to the previous observation.
    pub fn observe(&mut self, player: &str, current: &[ShipType]) -> Vec<ShipType> {
        match self.seen.get_mut(player) {
            None => {
                self.seen.insert(player.to_string(), current.to_vec());
                Vec::new()
            }
            Some(previous) => {
                let fresh: Vec<ShipType> = current
                    .iter()
                    .copied()
                    .filter(|ship| !previous.contains(ship))
                    .collect();
                *previous = current.to_vec();
                fresh
            }
        }
    }
}
