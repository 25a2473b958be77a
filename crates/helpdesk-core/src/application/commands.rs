//! Help desk application service
//!
//! Wires the form rules, the ticket store, the conversation guard and the
//! event publisher behind the [`TicketUseCases`] port.

use std::sync::Arc;
use async_trait::async_trait;

use crate::application::conversation::{Conversation, ConversationError};
use crate::application::dto::TicketReceipt;
use crate::application::forms::{FormRules, TicketForm};
use crate::application::queries::{TicketFilter, TicketSummary};
use crate::config::DeskConfig;
use crate::domain::aggregates::{Message, Ticket, TicketStatus};
use crate::domain::value_objects::{Sender, TicketId};
use crate::error::DeskError;
use crate::ports::inbound::TicketUseCases;
use crate::ports::outbound::EventPublisher;
use crate::store::TicketStore;

pub struct HelpDesk {
    store: Arc<TicketStore>,
    event_publisher: Arc<dyn EventPublisher>,
    rules: FormRules,
}

impl HelpDesk {
    pub fn new(store: Arc<TicketStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self { store, event_publisher, rules: FormRules::default() }
    }

    pub fn from_config(config: &DeskConfig, store: Arc<TicketStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self { store, event_publisher, rules: FormRules::from_config(config) }
    }

    pub fn store(&self) -> &Arc<TicketStore> {
        &self.store
    }

    /// Publish everything the store raised since the last flush.
    async fn flush_events(&self) -> Result<(), DeskError> {
        let events = self.store.drain_events();
        if !events.is_empty() {
            self.event_publisher.publish(events).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl TicketUseCases for HelpDesk {
    async fn raise_ticket(&self, form: TicketForm) -> Result<TicketReceipt, DeskError> {
        let input = form.validate_with(&self.rules).map_err(|errors| {
            tracing::debug!(errors = errors.errors().len(), "Ticket form rejected");
            errors
        })?;

        let ticket = self.store.create(input);
        self.flush_events().await?;

        Ok(TicketReceipt::from(&ticket))
    }

    async fn send_user_message(&self, ticket_id: &TicketId, content: &str) -> Result<Message, DeskError> {
        let message = Conversation::open(&self.store, ticket_id.clone())?.send(content)?;
        self.flush_events().await?;
        Ok(message)
    }

    async fn reply_as_admin(&self, ticket_id: &TicketId, content: &str) -> Result<Message, DeskError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ConversationError::EmptyMessage.into());
        }

        let message = self.store.append_message(ticket_id, content, Sender::Admin)?;
        self.flush_events().await?;
        Ok(message)
    }

    async fn update_status(&self, ticket_id: &TicketId, status: TicketStatus) -> Result<(), DeskError> {
        self.store.set_status(ticket_id, status)?;
        self.flush_events().await
    }

    async fn get_ticket(&self, ticket_id: &TicketId) -> Result<Option<Ticket>, DeskError> {
        Ok(self.store.get_by_id(ticket_id))
    }

    async fn list_tickets(&self, filter: &TicketFilter) -> Result<Vec<Ticket>, DeskError> {
        Ok(filter.apply(&self.store.snapshot()))
    }

    async fn summary(&self) -> Result<TicketSummary, DeskError> {
        Ok(TicketSummary::from_tickets(&self.store.snapshot()))
    }
}
