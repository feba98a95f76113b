//! Session runner: wires a decision-making controller to a room channel
//! and drives the session until the game ends or the connection drops.

use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::Rng;
use tokio::time::{sleep_until, Instant};

use crate::board::CellState;
use crate::channel::{Channel, ChannelEvent};
use crate::config::{BOARD_SIZE, HIGHLIGHT_DURATION};
use crate::geometry::Coordinate;
use crate::placement::{Fleet, PlacementError};
use crate::protocol::ServerMessage;
use crate::session::{Effect, GameState, Phase, Session};

/// Decision-making seam for whoever is driving the session: a bot, a
/// terminal prompt or a UI layer.
pub trait Controller: Send {
    /// Produce the full fleet to submit once the placing phase begins.
    fn plan_fleet(&mut self, rng: &mut SmallRng) -> Result<Fleet, PlacementError>;

    /// Pick the next target. Called only when it is our turn.
    fn select_target(&mut self, rng: &mut SmallRng, state: &GameState) -> Coordinate;

    /// Observe one-shot effects (sounds, animations, phase changes).
    fn handle_effect(&mut self, _effect: &Effect) {}
}

/// Controller that places its fleet and shoots at random, skipping
/// cells it has already tried.
pub struct RandomController;

impl RandomController {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for RandomController {
    fn plan_fleet(&mut self, rng: &mut SmallRng) -> Result<Fleet, PlacementError> {
        Fleet::generate(rng)
    }

    fn select_target(&mut self, rng: &mut SmallRng, state: &GameState) -> Coordinate {
        loop {
            let coordinate = Coordinate::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            let tried = state
                .opponent_board
                .as_ref()
                .is_some_and(|board| board.cell(coordinate) != CellState::Empty);
            if !tried {
                return coordinate;
            }
        }
    }
}

/// Drives one [`Session`] over a [`Channel`].
pub struct ClientNode {
    session: Session,
    channel: Box<dyn Channel>,
    controller: Box<dyn Controller>,
    awaiting_reply: bool,
}

impl ClientNode {
    pub fn new(controller: Box<dyn Controller>, channel: Box<dyn Channel>) -> Self {
        Self {
            session: Session::new(),
            channel,
            controller,
            awaiting_reply: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until the game finishes or the channel closes.
    ///
    /// The highlight-clear timer runs here rather than in the session:
    /// a pending deadline is raced against the next channel event, and
    /// a newer highlight simply replaces it, so clears never stack.
    pub async fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<()> {
        let mut highlight_deadline: Option<(Instant, u64)> = None;
        loop {
            let event = match highlight_deadline {
                Some((deadline, generation)) => {
                    tokio::select! {
                        event = self.channel.next_event() => event?,
                        _ = sleep_until(deadline) => {
                            if let Some(effect) = self.session.expire_highlight(generation) {
                                self.controller.handle_effect(&effect);
                            }
                            highlight_deadline = None;
                            continue;
                        }
                    }
                }
                None => self.channel.next_event().await?,
            };

            let is_snapshot = matches!(
                event,
                ChannelEvent::Message(ServerMessage::AttackShips { .. })
            );
            let effects = self.session.handle_event(event);
            if is_snapshot {
                self.awaiting_reply = false;
            }

            let mut done = false;
            for effect in &effects {
                match effect {
                    Effect::Highlight { generation, .. } => {
                        highlight_deadline = Some((Instant::now() + HIGHLIGHT_DURATION, *generation));
                    }
                    Effect::GameOver(result) => {
                        info!("game over: {} defeats {}", result.winner, result.loser);
                        done = true;
                    }
                    Effect::ConnectionLost => {
                        done = true;
                    }
                    Effect::ErrorMessage(text) => warn!("server: {}", text),
                    _ => {}
                }
                self.controller.handle_effect(effect);
            }
            if done {
                return Ok(());
            }

            self.advance(rng).await?;
        }
    }

    /// Take whatever action the current phase calls for.
    async fn advance(&mut self, rng: &mut SmallRng) -> anyhow::Result<()> {
        match self.session.phase() {
            Phase::Placing if !self.session.fleet_submitted() => {
                let fleet = self
                    .controller
                    .plan_fleet(rng)
                    .map_err(|e| anyhow::anyhow!(e))?;
                let message = self
                    .session
                    .submit_fleet(&fleet)
                    .map_err(|e| anyhow::anyhow!(e))?;
                self.channel.send(&message).await?;
                info!("fleet submitted");
            }
            Phase::Playing if self.session.game().your_turn && !self.awaiting_reply => {
                let target = self.controller.select_target(rng, self.session.game());
                match self.session.attack(target) {
                    Ok(message) => {
                        self.channel.send(&message).await?;
                        self.awaiting_reply = true;
                        debug!("attacking row {} column {}", target.row, target.column);
                    }
                    Err(error) => warn!("attack rejected: {}", error),
                }
            }
            _ => {}
        }
        Ok(())
    }
}
