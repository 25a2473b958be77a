//! Ticket Aggregate
//!
//! A ticket owns its message thread. Fields are private and there is no
//! public constructor: tickets come into existence through
//! [`TicketStore::create`](crate::store::TicketStore::create) and change only
//! through the store's append and status operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::events::{TicketEvent, TransitionCause};
use crate::domain::services::next_status;
use crate::domain::value_objects::{Email, MessageId, ParseVocabularyError, Priority, Sender, TicketId};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    id: TicketId,
    email: Email,
    subject: String,
    description: String,
    priority: Priority,
    status: TicketStatus,
    created_at: DateTime<Utc>,
    last_message: Option<String>,
    messages: Vec<Message>,
    #[serde(skip)]
    events: Vec<TicketEvent>,
}

/// One entry of a ticket thread.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Message {
    id: MessageId,
    content: String,
    sender: Sender,
    timestamp: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus { #[default] Waiting, Active, Resolved }

/// Validated creation input. Produced by [`TicketForm::validate`](crate::application::TicketForm::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTicket {
    pub(crate) email: Email,
    pub(crate) subject: String,
    pub(crate) description: String,
    pub(crate) priority: Priority,
}

impl NewTicket {
    pub(crate) fn new(email: Email, subject: impl Into<String>, description: impl Into<String>, priority: Priority) -> Self {
        Self { email, subject: subject.into(), description: description.into(), priority }
    }

    pub fn email(&self) -> &Email { &self.email }
    pub fn subject(&self) -> &str { &self.subject }
    pub fn description(&self) -> &str { &self.description }
    pub fn priority(&self) -> Priority { self.priority }
}

impl Message {
    pub(crate) fn new(id: MessageId, content: impl Into<String>, sender: Sender, timestamp: DateTime<Utc>) -> Self {
        Self { id, content: content.into(), sender, timestamp }
    }

    pub fn id(&self) -> &MessageId { &self.id }
    pub fn content(&self) -> &str { &self.content }
    pub fn sender(&self) -> Sender { self.sender }
    pub fn timestamp(&self) -> DateTime<Utc> { self.timestamp }
}

impl Ticket {
    /// Open a ticket. The description becomes the first user message.
    pub(crate) fn open(id: TicketId, input: NewTicket, first_message: MessageId, now: DateTime<Utc>) -> Self {
        let NewTicket { email, subject, description, priority } = input;
        let opening = Message::new(first_message, description.clone(), Sender::User, now);
        let mut t = Self {
            id: id.clone(), email, subject, description, priority, status: TicketStatus::Waiting,
            created_at: now, last_message: Some(opening.content.clone()), messages: vec![opening], events: vec![],
        };
        t.raise_event(TicketEvent::Created { ticket_id: id, priority, created_at: now });
        t
    }

    pub fn id(&self) -> &TicketId { &self.id }
    pub fn email(&self) -> &Email { &self.email }
    pub fn subject(&self) -> &str { &self.subject }
    pub fn description(&self) -> &str { &self.description }
    pub fn priority(&self) -> Priority { self.priority }
    pub fn status(&self) -> TicketStatus { self.status }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn last_message(&self) -> Option<&str> { self.last_message.as_deref() }
    pub fn messages(&self) -> &[Message] { &self.messages }
    pub fn is_resolved(&self) -> bool { self.status == TicketStatus::Resolved }

    /// Append to the thread and apply the automatic transition rule.
    pub(crate) fn append(&mut self, message: Message) {
        let from = self.status;
        let to = next_status(from, message.sender);
        self.last_message = Some(message.content.clone());
        self.raise_event(TicketEvent::MessageAppended {
            ticket_id: self.id.clone(), message_id: message.id.clone(), sender: message.sender, appended_at: message.timestamp,
        });
        if to != from {
            self.status = to;
            self.raise_event(TicketEvent::StatusChanged {
                ticket_id: self.id.clone(), from, to, cause: TransitionCause::Automatic, changed_at: message.timestamp,
            });
        }
        self.messages.push(message);
    }

    /// Administrative overwrite; any status may move to any other.
    pub(crate) fn override_status(&mut self, status: TicketStatus, now: DateTime<Utc>) -> TicketStatus {
        let from = std::mem::replace(&mut self.status, status);
        if from != status {
            self.raise_event(TicketEvent::StatusChanged {
                ticket_id: self.id.clone(), from, to: status, cause: TransitionCause::Override, changed_at: now,
            });
        }
        from
    }

    pub(crate) fn take_events(&mut self) -> Vec<TicketEvent> { std::mem::take(&mut self.events) }
    fn raise_event(&mut self, e: TicketEvent) { self.events.push(e); }
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 3] = [TicketStatus::Waiting, TicketStatus::Active, TicketStatus::Resolved];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "Waiting",
            Self::Active => "Active",
            Self::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for TicketStatus { fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) } }

impl FromStr for TicketStatus {
    type Err = ParseVocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseVocabularyError::new("status", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_ticket() -> Ticket {
        let input = NewTicket::new(Email::new_unchecked("a@b.com"), "X", "issue detail text", Priority::Low);
        Ticket::open(TicketId::new("TKT001"), input, MessageId::new("MSG0001"), Utc::now())
    }

    #[test]
    fn test_ticket_workflow() {
        let mut t = open_ticket();
        assert_eq!(t.status(), TicketStatus::Waiting);
        assert_eq!(t.messages().len(), 1);
        assert_eq!(t.messages()[0].sender(), Sender::User);
        assert_eq!(t.last_message(), Some("issue detail text"));

        t.append(Message::new(MessageId::new("MSG0002"), "looking into it", Sender::Admin, Utc::now()));
        assert_eq!(t.status(), TicketStatus::Waiting);

        t.append(Message::new(MessageId::new("MSG0003"), "thanks", Sender::User, Utc::now()));
        assert_eq!(t.status(), TicketStatus::Active);
        assert_eq!(t.last_message(), Some("thanks"));
        assert_eq!(t.messages().len(), 3);
    }

    #[test]
    fn test_events_raised() {
        let mut t = open_ticket();
        let events = t.take_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], TicketEvent::Created { .. }));

        t.append(Message::new(MessageId::new("MSG0002"), "please help", Sender::User, Utc::now()));
        let events = t.take_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[1], TicketEvent::StatusChanged { cause: TransitionCause::Automatic, to: TicketStatus::Active, .. }));
    }

    #[test]
    fn test_override_to_same_status_is_silent() {
        let mut t = open_ticket();
        t.take_events();
        assert_eq!(t.override_status(TicketStatus::Waiting, Utc::now()), TicketStatus::Waiting);
        assert!(t.take_events().is_empty());
        assert_eq!(t.override_status(TicketStatus::Resolved, Utc::now()), TicketStatus::Waiting);
        assert!(t.is_resolved());
    }

    #[test]
    fn test_status_parse_and_display() {
        assert_eq!("resolved".parse::<TicketStatus>().unwrap(), TicketStatus::Resolved);
        assert_eq!(TicketStatus::Active.to_string(), "Active");
        assert!("closed".parse::<TicketStatus>().is_err());
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let t = open_ticket();
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["status"], "Waiting");
        assert_eq!(json["lastMessage"], "issue detail text");
        assert_eq!(json["messages"][0]["sender"], "user");
        assert!(json.get("events").is_none());
    }
}
