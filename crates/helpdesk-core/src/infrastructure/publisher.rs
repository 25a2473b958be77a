//! Event publishers

use async_trait::async_trait;
use parking_lot::RwLock;
use tokio::sync::broadcast;

use crate::domain::events::TicketEvent;
use crate::ports::outbound::{EventPublisher, PublishError};

/// Fans ticket events out to any number of subscribers.
///
/// Publishing with no live subscriber is not an error; the events are dropped.
/// After [`shutdown`](Self::shutdown) subscribers drain what is buffered and
/// then see the channel close, and further publishes fail.
pub struct BroadcastEventPublisher {
    tx: RwLock<Option<broadcast::Sender<TicketEvent>>>,
}

impl BroadcastEventPublisher {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx: RwLock::new(Some(tx)) }
    }

    /// Subscribe to ticket events. `None` once shut down.
    pub fn subscribe(&self) -> Option<broadcast::Receiver<TicketEvent>> {
        self.tx.read().as_ref().map(|tx| tx.subscribe())
    }

    pub fn shutdown(&self) {
        self.tx.write().take();
    }
}

#[async_trait]
impl EventPublisher for BroadcastEventPublisher {
    async fn publish(&self, events: Vec<TicketEvent>) -> Result<(), PublishError> {
        let guard = self.tx.read();
        let tx = guard.as_ref().ok_or(PublishError::ChannelClosed)?;
        for event in events {
            if tx.send(event).is_err() {
                tracing::trace!("no subscribers for ticket event");
            }
        }
        Ok(())
    }
}

/// No-op event publisher
#[derive(Default)]
pub struct NoOpEventPublisher;

#[async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _events: Vec<TicketEvent>) -> Result<(), PublishError> {
        Ok(())
    }
}
