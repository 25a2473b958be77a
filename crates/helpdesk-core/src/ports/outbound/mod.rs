//! Outbound ports
//!
//! Identifier allocation, time and event delivery are injected so that the
//! store stays deterministic under test.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::events::TicketEvent;
use crate::domain::value_objects::{MessageId, TicketId};

/// Source of fresh ticket and message identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_ticket_id(&self) -> TicketId;
    fn next_message_id(&self) -> MessageId;
}

/// Source of timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Event publisher port
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish domain events in the order they were raised
    async fn publish(&self, events: Vec<TicketEvent>) -> Result<(), PublishError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PublishError {
    #[error("event channel closed")]
    ChannelClosed,
}
