//! Game-wide constants for the standard two-player configuration.

use std::time::Duration;

/// Board edge length; boards are always square.
pub const BOARD_SIZE: u8 = 10;

/// Number of ships in a complete fleet.
pub const NUM_SHIPS: usize = 5;

/// Total number of hull cells across the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Attempts per ship before random fleet generation gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// How long a fresh own-board strike highlight stays visible before the
/// session runner clears it.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_secs(1);
