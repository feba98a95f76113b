//! The room channel: a single long-lived duplex message stream per
//! session. Open/message/close callbacks are folded into one typed
//! inbound event stream so every state transition has exactly one
//! triggering event.

use crate::protocol::{ClientMessage, ServerMessage};

/// One inbound occurrence on the room channel.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelEvent {
    /// Connection established.
    Opened,
    /// A decoded server message.
    Message(ServerMessage),
    /// Connection ended; no further events will arrive. Reconnection is
    /// not automatic, the user has to leave and rejoin.
    Closed,
}

#[async_trait::async_trait]
pub trait Channel: Send {
    /// Fire-and-forget send of one outbound intent.
    async fn send(&mut self, message: &ClientMessage) -> anyhow::Result<()>;

    /// Next inbound event, in delivery order.
    async fn next_event(&mut self) -> anyhow::Result<ChannelEvent>;
}

pub mod in_memory;
pub mod ws;
