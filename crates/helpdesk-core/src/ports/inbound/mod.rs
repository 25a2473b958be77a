//! Inbound ports (Use case traits)

use async_trait::async_trait;

use crate::application::dto::TicketReceipt;
use crate::application::forms::TicketForm;
use crate::application::queries::{TicketFilter, TicketSummary};
use crate::domain::aggregates::{Message, Ticket, TicketStatus};
use crate::domain::value_objects::TicketId;
use crate::error::DeskError;

/// Ticket management use cases
#[async_trait]
pub trait TicketUseCases: Send + Sync {
    /// Validate a submitted form and open a ticket
    async fn raise_ticket(&self, form: TicketForm) -> Result<TicketReceipt, DeskError>;

    /// Message from the requester; refused once the ticket is resolved
    async fn send_user_message(&self, ticket_id: &TicketId, content: &str) -> Result<Message, DeskError>;

    /// Message from support staff
    async fn reply_as_admin(&self, ticket_id: &TicketId, content: &str) -> Result<Message, DeskError>;

    /// Administrative status override
    async fn update_status(&self, ticket_id: &TicketId, status: TicketStatus) -> Result<(), DeskError>;

    async fn get_ticket(&self, ticket_id: &TicketId) -> Result<Option<Ticket>, DeskError>;

    /// Filtered tickets, newest first
    async fn list_tickets(&self, filter: &TicketFilter) -> Result<Vec<Ticket>, DeskError>;

    async fn summary(&self) -> Result<TicketSummary, DeskError>;
}
