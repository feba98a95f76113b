//! Grid geometry: coordinates, orientations, ship classes and placement
//! shapes. Everything here is a pure function over plain values; bounds
//! violations are reported by callers, never by panicking.

use serde::{Deserialize, Serialize};

use crate::config::{BOARD_SIZE, NUM_SHIPS};

/// A cell position on the board. Row 0 is the top row, column 0 the
/// leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: u8,
    pub column: u8,
}

impl Coordinate {
    pub const fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// True when the coordinate lies on the board.
    pub fn on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.column < BOARD_SIZE
    }
}

/// Which way a ship extends from its start coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// The five ship classes. Hull length is fixed per class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShipType {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipType {
    /// Every ship class, largest first. A complete fleet has exactly one
    /// placement per entry.
    pub const ALL: [ShipType; NUM_SHIPS] = [
        ShipType::Carrier,
        ShipType::Battleship,
        ShipType::Cruiser,
        ShipType::Submarine,
        ShipType::Destroyer,
    ];

    pub const fn length(self) -> u8 {
        match self {
            ShipType::Carrier => 5,
            ShipType::Battleship => 4,
            ShipType::Cruiser => 3,
            ShipType::Submarine => 3,
            ShipType::Destroyer => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipType::Carrier => "Carrier",
            ShipType::Battleship => "Battleship",
            ShipType::Cruiser => "Cruiser",
            ShipType::Submarine => "Submarine",
            ShipType::Destroyer => "Destroyer",
        }
    }
}

/// A ship placement as sent to the server.
///
/// Horizontal ships extend rightward from the start coordinate
/// (increasing column). Vertical ships extend *upward* (decreasing row).
/// The upward vertical growth is part of the server's coordinate
/// contract; both bounds checks below and the server's own validation
/// depend on it, so it must not be "corrected" to grow downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub ship_type: ShipType,
    pub start_coordinate: Coordinate,
    pub orientation: Orientation,
}

impl Placement {
    /// Cells covered by this placement, in hull order starting at the
    /// start coordinate.
    ///
    /// Total for any input: shapes that would leave the grid clamp at
    /// the edge instead of panicking, so callers must check
    /// [`Placement::in_bounds`] before trusting the cells.
    pub fn occupied_cells(&self) -> Vec<Coordinate> {
        let length = self.ship_type.length();
        let Coordinate { row, column } = self.start_coordinate;
        (0..length)
            .map(|i| match self.orientation {
                Orientation::Horizontal => Coordinate::new(row, column.saturating_add(i)),
                Orientation::Vertical => Coordinate::new(row.saturating_sub(i), column),
            })
            .collect()
    }

    /// Whether the whole hull lies on the board.
    pub fn in_bounds(&self) -> bool {
        let length = self.ship_type.length();
        let Coordinate { row, column } = self.start_coordinate;
        if row >= BOARD_SIZE || column >= BOARD_SIZE {
            return false;
        }
        match self.orientation {
            Orientation::Horizontal => column + length - 1 < BOARD_SIZE,
            Orientation::Vertical => row >= length - 1,
        }
    }
}
