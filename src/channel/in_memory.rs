//! In-memory room channel for tests: inbound events are scripted
//! through a handle and outbound intents are captured for inspection.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::task::yield_now;

use crate::channel::{Channel, ChannelEvent};
use crate::protocol::ClientMessage;

pub struct InMemoryChannel {
    events: Arc<Mutex<VecDeque<ChannelEvent>>>,
    sent: Arc<Mutex<Vec<ClientMessage>>>,
}

/// Test-side handle feeding events in and reading sends out.
#[derive(Clone)]
pub struct InMemoryHandle {
    events: Arc<Mutex<VecDeque<ChannelEvent>>>,
    sent: Arc<Mutex<Vec<ClientMessage>>>,
}

impl InMemoryChannel {
    pub fn pair() -> (Self, InMemoryHandle) {
        let events = Arc::new(Mutex::new(VecDeque::new()));
        let sent = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                events: events.clone(),
                sent: sent.clone(),
            },
            InMemoryHandle { events, sent },
        )
    }
}

impl InMemoryHandle {
    pub fn push(&self, event: ChannelEvent) {
        self.events.lock().unwrap().push_back(event);
    }

    pub fn sent(&self) -> Vec<ClientMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Channel for InMemoryChannel {
    async fn send(&mut self, message: &ClientMessage) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }

    async fn next_event(&mut self) -> anyhow::Result<ChannelEvent> {
        loop {
            if let Some(event) = { self.events.lock().unwrap().pop_front() } {
                return Ok(event);
            }
            if Arc::strong_count(&self.events) == 1 {
                return Ok(ChannelEvent::Closed);
            }
            yield_now().await;
        }
    }
}
