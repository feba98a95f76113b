//! Client engine for a two-player naval bombardment web game.
//!
//! The server owns authoritative game state; this crate maintains a
//! consistent local mirror of it. It decodes room-channel messages,
//! reconciles complete board snapshots into one-shot feedback effects,
//! validates and procedurally generates ship placements, and tracks the
//! session phase and turn ownership. Rendering and audio belong to the
//! embedding application, which consumes the [`Effect`]s emitted here.

mod bitgrid;
mod board;
pub mod channel;
mod client;
mod config;
mod diff;
mod geometry;
mod lobby;
mod logging;
mod placement;
pub mod protocol;
mod session;

pub use bitgrid::BitGrid;
pub use board::{Board, CellState};
pub use channel::in_memory::{InMemoryChannel, InMemoryHandle};
pub use channel::ws::WsChannel;
pub use channel::{Channel, ChannelEvent};
pub use client::{ClientNode, Controller, RandomController};
pub use config::*;
pub use diff::{diff, SunkShipTracker};
pub use geometry::{Coordinate, Orientation, Placement, ShipType};
pub use lobby::{create_game_url, join_url, parse_room_list, rooms_url, RoomState};
pub use logging::init_logging;
pub use placement::{rotate, Fleet, PlacementError};
pub use protocol::{decode, ClientMessage, ProtocolError, ServerMessage};
pub use session::{
    ChannelState, Effect, GameResult, GameState, Phase, Session, SessionError,
};
