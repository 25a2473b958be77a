//! Ticket store
//!
//! The only owner of ticket state. Every operation runs to completion before
//! returning. Mutations on one ticket are serialized by the map entry guard,
//! so the thread order and status transitions stay consistent even if the
//! store is shared between threads.

use std::collections::VecDeque;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, trace, warn};

use crate::config::DeskConfig;
use crate::domain::aggregates::{Message, NewTicket, Ticket, TicketStatus};
use crate::domain::events::TicketEvent;
use crate::domain::value_objects::{Sender, TicketId};
use crate::error::{StoreError, StoreResult};
use crate::infrastructure::{SequentialIdGenerator, SystemClock};
use crate::ports::outbound::{Clock, IdGenerator};

pub struct TicketStore {
    tickets: DashMap<TicketId, Ticket>,
    /// Creation order, newest first.
    order: RwLock<VecDeque<TicketId>>,
    /// Undrained events, oldest first. Holds at most `event_capacity` entries.
    pending_events: Mutex<VecDeque<TicketEvent>>,
    event_capacity: usize,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl TicketStore {
    pub fn new(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self {
            tickets: DashMap::new(),
            order: RwLock::new(VecDeque::new()),
            pending_events: Mutex::new(VecDeque::new()),
            event_capacity: DeskConfig::default().event_buffer,
            ids,
            clock,
        }
    }

    /// Keep at most `capacity` undrained events; older ones are dropped first.
    pub fn with_event_buffer(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity.max(1);
        self
    }

    /// Open a ticket. Its description is recorded as the first user message.
    ///
    /// The generator must eventually hand out an unused id; ids already in the
    /// store are skipped.
    pub fn create(&self, input: NewTicket) -> Ticket {
        // Held across the insert so snapshot order matches creation order.
        let mut order = self.order.write();
        let now = self.clock.now();
        let ticket = loop {
            let id = self.ids.next_ticket_id();
            match self.tickets.entry(id) {
                Entry::Occupied(taken) => {
                    warn!(ticket_id = %taken.key(), "generated ticket id already in use, retrying");
                }
                Entry::Vacant(slot) => {
                    let mut ticket = Ticket::open(slot.key().clone(), input, self.ids.next_message_id(), now);
                    self.record(ticket.take_events());
                    break slot.insert(ticket).clone();
                }
            }
        };
        order.push_front(ticket.id().clone());
        drop(order);

        info!(ticket_id = %ticket.id(), priority = %ticket.priority(), "Ticket created");
        ticket
    }

    /// Append a message and apply the automatic status rule.
    pub fn append_message(&self, ticket_id: &TicketId, content: impl Into<String>, sender: Sender) -> StoreResult<Message> {
        let mut ticket = self.tickets.get_mut(ticket_id).ok_or_else(|| not_found(ticket_id))?;
        Ok(self.append_locked(&mut ticket, content.into(), sender))
    }

    /// Append only if `accept` approves the ticket as it is right now.
    ///
    /// The check and the append happen under the same entry guard, so no other
    /// writer can change the ticket in between. `Ok(None)` means refused.
    pub fn append_message_if<F>(
        &self,
        ticket_id: &TicketId,
        content: impl Into<String>,
        sender: Sender,
        accept: F,
    ) -> StoreResult<Option<Message>>
    where
        F: FnOnce(&Ticket) -> bool,
    {
        let mut ticket = self.tickets.get_mut(ticket_id).ok_or_else(|| not_found(ticket_id))?;
        if !accept(&ticket) {
            debug!(ticket_id = %ticket_id, sender = %sender, "Message refused");
            return Ok(None);
        }
        Ok(Some(self.append_locked(&mut ticket, content.into(), sender)))
    }

    fn append_locked(&self, ticket: &mut Ticket, content: String, sender: Sender) -> Message {
        let message = Message::new(self.ids.next_message_id(), content, sender, self.clock.now());
        let before = ticket.status();
        ticket.append(message.clone());
        self.record(ticket.take_events());

        debug!(ticket_id = %ticket.id(), message_id = %message.id(), sender = %sender, "Message appended");
        if ticket.status() != before {
            debug!(ticket_id = %ticket.id(), from = %before, to = %ticket.status(), "Ticket status advanced");
        }
        message
    }

    /// Overwrite the status. No transition is refused at this layer.
    pub fn set_status(&self, ticket_id: &TicketId, status: TicketStatus) -> StoreResult<()> {
        let mut ticket = self.tickets.get_mut(ticket_id).ok_or_else(|| not_found(ticket_id))?;

        let from = ticket.override_status(status, self.clock.now());
        self.record(ticket.take_events());

        info!(ticket_id = %ticket_id, from = %from, to = %status, "Ticket status set");
        Ok(())
    }

    pub fn get_by_id(&self, ticket_id: &TicketId) -> Option<Ticket> {
        self.tickets.get(ticket_id).map(|t| t.clone())
    }

    /// All tickets, most recently created first.
    pub fn snapshot(&self) -> Vec<Ticket> {
        self.order
            .read()
            .iter()
            .filter_map(|id| self.tickets.get(id).map(|t| t.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Take the events raised since the last drain, oldest first.
    pub fn drain_events(&self) -> Vec<TicketEvent> {
        self.pending_events.lock().drain(..).collect()
    }

    fn record(&self, events: Vec<TicketEvent>) {
        let mut pending = self.pending_events.lock();
        pending.extend(events);
        let overflow = pending.len().saturating_sub(self.event_capacity);
        if overflow > 0 {
            pending.drain(..overflow);
            trace!(dropped = overflow, "event buffer full, oldest events dropped");
        }
    }
}

impl Default for TicketStore {
    fn default() -> Self {
        Self::new(Arc::new(SequentialIdGenerator::default()), Arc::new(SystemClock))
    }
}

fn not_found(ticket_id: &TicketId) -> StoreError {
    warn!(ticket_id = %ticket_id, "Ticket not found");
    StoreError::NotFound(ticket_id.clone())
}
