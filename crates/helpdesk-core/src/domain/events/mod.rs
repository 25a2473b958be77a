//! Support domain events
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::aggregates::TicketStatus;
use crate::domain::value_objects::{MessageId, Priority, Sender, TicketId};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TicketEvent {
    Created { ticket_id: TicketId, priority: Priority, created_at: DateTime<Utc> },
    MessageAppended { ticket_id: TicketId, message_id: MessageId, sender: Sender, appended_at: DateTime<Utc> },
    StatusChanged { ticket_id: TicketId, from: TicketStatus, to: TicketStatus, cause: TransitionCause, changed_at: DateTime<Utc> },
}

/// What moved a ticket between statuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionCause {
    /// User message on a waiting ticket.
    Automatic,
    /// Administrative `set_status`.
    Override,
}

impl TicketEvent {
    pub fn ticket_id(&self) -> &TicketId {
        match self {
            Self::Created { ticket_id, .. }
            | Self::MessageAppended { ticket_id, .. }
            | Self::StatusChanged { ticket_id, .. } => ticket_id,
        }
    }
}
