//! Data transfer objects

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::aggregates::{Ticket, TicketStatus};
use crate::domain::value_objects::TicketId;

/// Confirmation handed back after a ticket is raised. Carries the store's
/// canonical ticket id; there is no second, display-only identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketReceipt {
    pub ticket_id: TicketId,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
}

impl From<&Ticket> for TicketReceipt {
    fn from(ticket: &Ticket) -> Self {
        Self { ticket_id: ticket.id().clone(), status: ticket.status(), created_at: ticket.created_at() }
    }
}
