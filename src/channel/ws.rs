//! WebSocket implementation of the room channel.

use anyhow::Context;
use futures_util::{SinkExt, StreamExt};
use log::warn;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::channel::{Channel, ChannelEvent};
use crate::protocol::{self, ClientMessage, ServerMessage};

/// Room channel over a `tokio-tungstenite` client connection.
pub struct WsChannel {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
    opened: bool,
}

impl WsChannel {
    /// Connect to a join URL (`ws://<host>/join/<room>/<player>`).
    pub async fn connect(url: &str) -> anyhow::Result<Self> {
        let (stream, _response) = connect_async(url)
            .await
            .with_context(|| format!("connecting to {url}"))?;
        Ok(Self {
            stream,
            opened: false,
        })
    }
}

#[async_trait::async_trait]
impl Channel for WsChannel {
    async fn send(&mut self, message: &ClientMessage) -> anyhow::Result<()> {
        let json = serde_json::to_string(message)
            .map_err(|e| anyhow::anyhow!("serialization error: {}", e))?;
        self.stream
            .send(WsMessage::Text(json.into()))
            .await
            .map_err(|e| anyhow::anyhow!("send error: {}", e))
    }

    async fn next_event(&mut self) -> anyhow::Result<ChannelEvent> {
        if !self.opened {
            self.opened = true;
            return Ok(ChannelEvent::Opened);
        }
        loop {
            match self.stream.next().await {
                Some(Ok(WsMessage::Text(raw))) => {
                    let message = protocol::decode(raw.as_str()).unwrap_or_else(|error| {
                        warn!("undecodable frame: {}", raw);
                        ServerMessage::Error {
                            error: error.to_string(),
                        }
                    });
                    return Ok(ChannelEvent::Message(message));
                }
                Some(Ok(WsMessage::Close(_))) | None => return Ok(ChannelEvent::Closed),
                // Pings are answered by the library; binary frames are
                // not part of this protocol.
                Some(Ok(_)) => continue,
                Some(Err(e)) => return Err(anyhow::anyhow!("receive error: {}", e)),
            }
        }
    }
}
