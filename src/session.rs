//! Session state machine: phase tracking, turn ownership and snapshot
//! reconciliation.
//!
//! All transitions are driven by inbound channel events; the client
//! never predicts a phase or turn change ahead of server confirmation.
//! Each transition returns the one-shot [`Effect`]s it produced so the
//! consuming layer can play sounds and run animations exactly once.

use core::fmt;

use log::{debug, warn};

use crate::board::{Board, CellState};
use crate::channel::ChannelEvent;
use crate::diff::diff;
use crate::geometry::Coordinate;
use crate::placement::Fleet;
use crate::protocol::{ClientMessage, ServerMessage};

/// Coarse session stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Alone in the room; the opponent seat is still empty.
    WaitingForOpponentEnter,
    /// Both seated and our fleet is recorded; the opponent is still
    /// placing.
    WaitingForOpponentStart,
    /// Both seated, our fleet not yet submitted.
    Placing,
    Playing,
    /// Terminal; entered only via a `Win` message.
    Finished,
}

/// Lifecycle of the room channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    Connecting,
    Open,
    Closed,
}

/// Local view of the running game, replaced wholesale per snapshot.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    pub your_turn: bool,
    pub your_board: Board,
    /// Absent until the server first reveals the masked opponent view.
    pub opponent_board: Option<Board>,
}

/// Terminal result delivered by a `Win` message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub winner: String,
    pub loser: String,
}

/// One-shot output of a state transition, consumed by the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    PhaseChanged(Phase),
    /// Own-board cells struck since the previous snapshot, shown as a
    /// transient animation until expired or superseded.
    Highlight {
        cells: Vec<Coordinate>,
        generation: u64,
    },
    HighlightCleared {
        generation: u64,
    },
    /// The opponent's latest shot at us landed or splashed. Fires at
    /// most once per snapshot, for the most recently touched cell.
    OwnBoardStruck {
        coordinate: Coordinate,
        state: CellState,
    },
    /// Our own latest attack resolved on the opponent board.
    AttackResolved {
        coordinate: Coordinate,
        state: CellState,
    },
    GameOver(GameResult),
    /// Error text for the user; the session itself is unaffected.
    ErrorMessage(String),
    ConnectionLost,
}

/// Local precondition failure. Nothing is transmitted when one occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    NotYourTurn,
    ChannelClosed,
    GameFinished,
    FleetIncomplete,
    FleetAlreadySubmitted,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NotYourTurn => write!(f, "It's not your turn!"),
            SessionError::ChannelClosed => write!(f, "WebSocket is not connected."),
            SessionError::GameFinished => write!(f, "The game has already ended."),
            SessionError::FleetIncomplete => write!(f, "Not all ships have been placed."),
            SessionError::FleetAlreadySubmitted => {
                write!(f, "Ship placement was already submitted.")
            }
        }
    }
}

/// Canonical client-side state for one room session.
pub struct Session {
    phase: Phase,
    channel: ChannelState,
    game: GameState,
    result: Option<GameResult>,
    have_snapshot: bool,
    fleet_submitted: bool,
    last_attack: Option<Coordinate>,
    highlight: Vec<Coordinate>,
    highlight_generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: Phase::WaitingForOpponentEnter,
            channel: ChannelState::Connecting,
            game: GameState::default(),
            result: None,
            have_snapshot: false,
            fleet_submitted: false,
            last_attack: None,
            highlight: Vec::new(),
            highlight_generation: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn channel_state(&self) -> ChannelState {
        self.channel
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    pub fn fleet_submitted(&self) -> bool {
        self.fleet_submitted
    }

    /// Own-board cells currently highlighted.
    pub fn highlight(&self) -> &[Coordinate] {
        &self.highlight
    }

    /// Apply one inbound channel event as a single atomic transition.
    pub fn handle_event(&mut self, event: ChannelEvent) -> Vec<Effect> {
        match event {
            ChannelEvent::Opened => {
                self.channel = ChannelState::Open;
                debug!("room channel open");
                Vec::new()
            }
            ChannelEvent::Closed => {
                self.channel = ChannelState::Closed;
                if self.phase != Phase::Finished {
                    warn!("room channel closed mid-session");
                }
                vec![Effect::ConnectionLost]
            }
            ChannelEvent::Message(message) => self.handle_message(message),
        }
    }

    fn handle_message(&mut self, message: ServerMessage) -> Vec<Effect> {
        match message {
            ServerMessage::PlaceShips { players, board } => {
                self.on_place_ships(players, board.is_some())
            }
            ServerMessage::AttackShips {
                your_turn,
                your_board,
                opponent_board,
            } => self.on_snapshot(your_turn, your_board, opponent_board),
            ServerMessage::Win { winner, loser } => self.on_win(winner, loser),
            ServerMessage::Error { error } => vec![Effect::ErrorMessage(error)],
        }
    }

    fn set_phase(&mut self, phase: Phase, effects: &mut Vec<Effect>) {
        if self.phase != phase {
            debug!("phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
            effects.push(Effect::PhaseChanged(phase));
        }
    }

    fn on_place_ships(&mut self, players: u8, board_recorded: bool) -> Vec<Effect> {
        let mut effects = Vec::new();
        // Placement updates are superseded once snapshots start flowing.
        if matches!(self.phase, Phase::Playing | Phase::Finished) {
            return effects;
        }
        let phase = if players < 2 {
            Phase::WaitingForOpponentEnter
        } else if board_recorded {
            Phase::WaitingForOpponentStart
        } else {
            Phase::Placing
        };
        self.set_phase(phase, &mut effects);
        effects
    }

    fn on_snapshot(
        &mut self,
        your_turn: bool,
        your_cells: Vec<(Coordinate, CellState)>,
        opponent_cells: Option<Vec<(Coordinate, CellState)>>,
    ) -> Vec<Effect> {
        if self.phase == Phase::Finished {
            return Vec::new();
        }
        let mut effects = Vec::new();
        self.set_phase(Phase::Playing, &mut effects);

        let your_board = Board::from_cells(your_cells);
        let opponent_board = opponent_cells.map(Board::from_cells);

        // The very first snapshot has nothing to compare against and
        // must stay silent even when it already covers many moves. From
        // then on a null opponent board reads as all-empty.
        let empty = Board::new();
        let previous_yours = self.have_snapshot.then_some(&self.game.your_board);
        let previous_opponents = if self.have_snapshot {
            Some(self.game.opponent_board.as_ref().unwrap_or(&empty))
        } else {
            None
        };

        let own_changed = diff(previous_yours, &your_board);
        let opponent_changed = match &opponent_board {
            Some(current) => diff(previous_opponents, current),
            None => Vec::new(),
        };

        if let Some(&struck) = own_changed.last() {
            let state = your_board.cell(struck);
            if matches!(state, CellState::HitShip | CellState::Miss) {
                effects.push(Effect::OwnBoardStruck {
                    coordinate: struck,
                    state,
                });
            }
        }
        if let (Some(target), Some(current)) = (self.last_attack, opponent_board.as_ref()) {
            if opponent_changed.contains(&target) {
                effects.push(Effect::AttackResolved {
                    coordinate: target,
                    state: current.cell(target),
                });
            }
        }
        if !own_changed.is_empty() {
            self.highlight_generation += 1;
            self.highlight = own_changed.clone();
            effects.push(Effect::Highlight {
                cells: own_changed,
                generation: self.highlight_generation,
            });
        }

        self.game = GameState {
            your_turn,
            your_board,
            opponent_board,
        };
        self.have_snapshot = true;
        effects
    }

    fn on_win(&mut self, winner: String, loser: String) -> Vec<Effect> {
        if self.result.is_some() {
            return Vec::new();
        }
        let mut effects = Vec::new();
        self.set_phase(Phase::Finished, &mut effects);
        let result = GameResult { winner, loser };
        self.result = Some(result.clone());
        effects.push(Effect::GameOver(result));
        effects
    }

    /// Drop an expired highlight. A newer diff bumps the generation, so
    /// a stale timer never clears a highlight it did not start.
    pub fn expire_highlight(&mut self, generation: u64) -> Option<Effect> {
        if generation == self.highlight_generation && !self.highlight.is_empty() {
            self.highlight.clear();
            Some(Effect::HighlightCleared { generation })
        } else {
            None
        }
    }

    /// Build an attack intent for `coordinate`. The attacked cell is
    /// remembered so the resolving snapshot can be matched back to it.
    pub fn attack(&mut self, coordinate: Coordinate) -> Result<ClientMessage, SessionError> {
        if self.channel != ChannelState::Open {
            return Err(SessionError::ChannelClosed);
        }
        if self.result.is_some() {
            return Err(SessionError::GameFinished);
        }
        if !self.game.your_turn {
            return Err(SessionError::NotYourTurn);
        }
        self.last_attack = Some(coordinate);
        Ok(ClientMessage::AttackShips { coordinate })
    }

    /// Build the fleet submission. Allowed at most once per session and
    /// only for a complete fleet.
    pub fn submit_fleet(&mut self, fleet: &Fleet) -> Result<ClientMessage, SessionError> {
        if self.channel != ChannelState::Open {
            return Err(SessionError::ChannelClosed);
        }
        if self.fleet_submitted {
            return Err(SessionError::FleetAlreadySubmitted);
        }
        if !fleet.is_complete() {
            return Err(SessionError::FleetIncomplete);
        }
        self.fleet_submitted = true;
        Ok(ClientMessage::PlaceShips {
            placements: fleet.placements().to_vec(),
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
