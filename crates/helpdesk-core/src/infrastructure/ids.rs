//! Identifier generators

use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::DeskConfig;
use crate::domain::value_objects::{MessageId, TicketId};
use crate::ports::outbound::IdGenerator;

const MESSAGE_ID_WIDTH: usize = 4;

/// Monotonic, human-readable identifiers: `TKT001`, `TKT002`, `MSG0001`, ...
///
/// Counters are independent for tickets and messages and never repeat within
/// one generator. Numbers wider than the configured width are printed in full.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    ticket_prefix: String,
    ticket_width: usize,
    message_prefix: String,
    tickets: AtomicU64,
    messages: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(ticket_prefix: impl Into<String>, ticket_width: usize, message_prefix: impl Into<String>) -> Self {
        Self {
            ticket_prefix: ticket_prefix.into(),
            ticket_width,
            message_prefix: message_prefix.into(),
            tickets: AtomicU64::new(0),
            messages: AtomicU64::new(0),
        }
    }

    pub fn from_config(config: &DeskConfig) -> Self {
        Self::new(&config.ticket_id_prefix, config.ticket_id_width, &config.message_id_prefix)
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::from_config(&DeskConfig::default())
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_ticket_id(&self) -> TicketId {
        let n = self.tickets.fetch_add(1, Ordering::Relaxed) + 1;
        TicketId::new(format!("{}{:0width$}", self.ticket_prefix, n, width = self.ticket_width))
    }

    fn next_message_id(&self) -> MessageId {
        let n = self.messages.fetch_add(1, Ordering::Relaxed) + 1;
        MessageId::new(format!("{}{:0width$}", self.message_prefix, n, width = MESSAGE_ID_WIDTH))
    }
}

/// Random v4 UUID identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_ticket_id(&self) -> TicketId {
        TicketId::new(uuid::Uuid::new_v4().to_string())
    }

    fn next_message_id(&self) -> MessageId {
        MessageId::new(uuid::Uuid::new_v4().to_string())
    }
}
