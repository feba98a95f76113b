//! Lobby API shapes: room listing, room creation and the join endpoint.
//!
//! The engine defines the message shapes and endpoint URLs; issuing the
//! actual HTTP requests is left to the embedding application.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::geometry::ShipType;
use crate::protocol::ProtocolError;

/// One room as returned by `GET /rooms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomState {
    pub id: String,
    pub players: u8,
    pub players_names: Vec<String>,
    pub room_name: String,
    pub sunk_ships: BTreeMap<String, Vec<ShipType>>,
    pub has_ended: bool,
}

impl RoomState {
    /// Sunk ships recorded for `player`; empty when the player is
    /// unknown to the room.
    pub fn sunk_ships_of(&self, player: &str) -> &[ShipType] {
        self.sunk_ships
            .get(player)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The other seated player's name, if any.
    pub fn opponent_of(&self, player: &str) -> Option<&str> {
        self.players_names
            .iter()
            .map(String::as_str)
            .find(|name| *name != player)
    }
}

/// `GET` endpoint listing all rooms.
pub fn rooms_url(base: &str) -> String {
    format!("{base}/rooms")
}

/// `POST` endpoint creating a room. The response body is the bare room
/// id as text.
pub fn create_game_url(base: &str) -> String {
    format!("{base}/createGame")
}

/// WebSocket endpoint joining `room_id` as `player_name`.
pub fn join_url(ws_base: &str, room_id: &str, player_name: &str) -> String {
    format!("{ws_base}/join/{room_id}/{player_name}")
}

/// Decode the `GET /rooms` response body.
pub fn parse_room_list(raw: &str) -> Result<Vec<RoomState>, ProtocolError> {
    serde_json::from_str(raw).map_err(|_| ProtocolError::Unrecognized)
}
