//! Wire protocol: JSON envelopes exchanged with the game server over
//! the room channel. Envelopes are objects tagged by a `type` field;
//! there is no versioning and no binary framing.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::board::CellState;
use crate::geometry::{Coordinate, Placement};

/// Messages the server pushes over the room channel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    /// Placement-phase room update. `board` is whatever fleet the server
    /// has recorded for this player; only its presence matters to the
    /// client.
    PlaceShips {
        players: u8,
        #[serde(default)]
        board: Option<serde_json::Value>,
    },
    /// Complete snapshot of both boards, replacing all prior board
    /// state. `opponentBoard` stays null until the server first reveals
    /// the masked opponent view.
    #[serde(rename_all = "camelCase")]
    AttackShips {
        your_turn: bool,
        your_board: Vec<(Coordinate, CellState)>,
        #[serde(default)]
        opponent_board: Option<Vec<(Coordinate, CellState)>>,
    },
    /// Terminal game result.
    Win { winner: String, loser: String },
    /// Server-reported error, surfaced to the user verbatim.
    Error { error: String },
}

/// Client-to-server intents.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    AttackShips { coordinate: Coordinate },
    PlaceShips { placements: Vec<Placement> },
}

/// Inbound payload that matched no known shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    Unrecognized,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::Unrecognized => write!(f, "Unexpected message from server."),
        }
    }
}

/// Decode one inbound frame.
///
/// The server normally sends JSON envelopes, but placement verdicts can
/// arrive as bare text; those are folded into `Error` envelopes with the
/// wording the rest of the client expects. Anything else is
/// `Unrecognized`, which callers surface as a transient user error
/// without dropping the connection.
pub fn decode(raw: &str) -> Result<ServerMessage, ProtocolError> {
    if let Ok(message) = serde_json::from_str(raw) {
        return Ok(message);
    }
    let error = match raw.trim() {
        "ShipOutOfBounds" => "Ship placement is out of bounds!",
        "ShipsAreIntersecting" => "Placed ships are intersecting!",
        "WrongAmountOfShips" => "Wrong amount of placed ships!",
        _ => return Err(ProtocolError::Unrecognized),
    };
    Ok(ServerMessage::Error {
        error: error.to_string(),
    })
}
