//! Help desk ticket core
//!
//! Users open tickets, exchange messages with support staff, and tickets move
//! through a small status lifecycle: Waiting, Active, Resolved.
//!
//! ## Architecture
//!
//! - **Store**: [`TicketStore`], the single owner of tickets and threads
//! - **Domain Layer**: ticket aggregate, value objects, events, [`next_status`]
//! - **Application Layer**: form validation, conversation guard, list queries,
//!   the [`HelpDesk`] service
//! - **Ports Layer**: id generation, clock and event publishing interfaces
//! - **Infrastructure Layer**: concrete adapters and demo fixtures
//!
//! ```
//! use helpdesk_core::{Priority, Sender, TicketForm, TicketStatus, TicketStore};
//!
//! let store = TicketStore::default();
//! let input = TicketForm::new("a@b.com", "X", "issue detail text", Priority::Low).validate().unwrap();
//! let ticket = store.create(input);
//! store.append_message(ticket.id(), "please help", Sender::User).unwrap();
//! assert_eq!(store.get_by_id(ticket.id()).unwrap().status(), TicketStatus::Active);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ports;
pub mod store;

pub use application::{
    Conversation, ConversationError, FieldError, FormErrors, FormField, FormRules, HelpDesk, TicketFilter,
    TicketForm, TicketReceipt, TicketSummary,
};
pub use config::DeskConfig;
pub use domain::{
    next_status, Email, EmailError, Message, MessageId, NewTicket, Priority, Sender, Ticket, TicketEvent, TicketId,
    TicketStatus, TransitionCause,
};
pub use error::{ConfigError, DeskError, StoreError, StoreResult};
pub use ports::inbound::TicketUseCases;
pub use ports::outbound::{Clock, EventPublisher, IdGenerator, PublishError};
pub use store::TicketStore;
