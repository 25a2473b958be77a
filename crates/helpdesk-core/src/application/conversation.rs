//! Conversation guard
//!
//! What a user-facing chat view is allowed to do with one ticket thread:
//! read it, and send trimmed, non-empty messages until the ticket is resolved.

use crate::domain::aggregates::{Message, Ticket, TicketStatus};
use crate::domain::value_objects::{Sender, TicketId};
use crate::error::StoreError;
use crate::store::TicketStore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversationError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("ticket {0} is resolved and no longer accepts messages")]
    TicketResolved(TicketId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct Conversation<'a> {
    store: &'a TicketStore,
    ticket_id: TicketId,
}

impl<'a> Conversation<'a> {
    /// Attach to an existing ticket.
    pub fn open(store: &'a TicketStore, ticket_id: TicketId) -> Result<Self, ConversationError> {
        if store.get_by_id(&ticket_id).is_none() {
            return Err(StoreError::NotFound(ticket_id).into());
        }
        Ok(Self { store, ticket_id })
    }

    pub fn ticket_id(&self) -> &TicketId {
        &self.ticket_id
    }

    /// Current ticket snapshot.
    pub fn ticket(&self) -> Result<Ticket, ConversationError> {
        self.store
            .get_by_id(&self.ticket_id)
            .ok_or_else(|| StoreError::NotFound(self.ticket_id.clone()).into())
    }

    pub fn messages(&self) -> Result<Vec<Message>, ConversationError> {
        Ok(self.ticket()?.messages().to_vec())
    }

    pub fn can_send(&self) -> bool {
        self.store
            .get_by_id(&self.ticket_id)
            .is_some_and(|t| t.status() != TicketStatus::Resolved)
    }

    /// Send a user message.
    pub fn send(&self, content: &str) -> Result<Message, ConversationError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ConversationError::EmptyMessage);
        }
        match self.store.append_message_if(&self.ticket_id, content, Sender::User, |t| !t.is_resolved())? {
            Some(message) => Ok(message),
            None => {
                tracing::debug!(ticket_id = %self.ticket_id, "Send refused on resolved ticket");
                Err(ConversationError::TicketResolved(self.ticket_id.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::TicketForm;
    use crate::domain::value_objects::Priority;

    fn store_with_ticket() -> (TicketStore, TicketId) {
        let store = TicketStore::default();
        let input = TicketForm::new("a@b.com", "X", "issue detail text", Priority::Low).validate().unwrap();
        let id = store.create(input).id().clone();
        (store, id)
    }

    #[test]
    fn test_send_trims_and_activates() {
        let (store, id) = store_with_ticket();
        let conversation = Conversation::open(&store, id.clone()).unwrap();

        let message = conversation.send("  please help \n").unwrap();

        assert_eq!(message.content(), "please help");
        assert_eq!(message.sender(), Sender::User);
        assert_eq!(conversation.ticket().unwrap().status(), TicketStatus::Active);
        assert_eq!(conversation.messages().unwrap().len(), 2);
    }

    #[test]
    fn test_blank_message_rejected() {
        let (store, id) = store_with_ticket();
        let conversation = Conversation::open(&store, id.clone()).unwrap();

        assert_eq!(conversation.send("   "), Err(ConversationError::EmptyMessage));
        assert_eq!(store.get_by_id(&id).unwrap().messages().len(), 1);
    }

    #[test]
    fn test_resolved_ticket_blocks_sends() {
        let (store, id) = store_with_ticket();
        let conversation = Conversation::open(&store, id.clone()).unwrap();
        store.set_status(&id, TicketStatus::Resolved).unwrap();

        assert!(!conversation.can_send());
        assert_eq!(conversation.send("hello?"), Err(ConversationError::TicketResolved(id.clone())));
        assert_eq!(store.get_by_id(&id).unwrap().messages().len(), 1);
    }

    #[test]
    fn test_resolve_racing_sends_never_lands_after_resolution() {
        let (store, id) = store_with_ticket();
        let store = std::sync::Arc::new(store);

        let sender = {
            let store = store.clone();
            let id = id.clone();
            std::thread::spawn(move || {
                let conversation = Conversation::open(&store, id).unwrap();
                (0..200).filter(|n| conversation.send(&format!("update {}", n)).is_ok()).count()
            })
        };
        store.set_status(&id, TicketStatus::Resolved).unwrap();
        let resolved_len = store.get_by_id(&id).unwrap().messages().len();
        let delivered = sender.join().unwrap();

        let ticket = store.get_by_id(&id).unwrap();
        assert!(ticket.is_resolved());
        assert_eq!(ticket.messages().len(), resolved_len);
        assert_eq!(ticket.messages().len(), delivered + 1);
    }

    #[test]
    fn test_open_missing_ticket() {
        let store = TicketStore::default();
        let missing = TicketId::from("missing-id");
        assert!(matches!(
            Conversation::open(&store, missing),
            Err(ConversationError::Store(StoreError::NotFound(_)))
        ));
    }
}
