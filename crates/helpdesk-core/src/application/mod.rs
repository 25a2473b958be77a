//! Application layer
//!
//! Collaborators around the ticket store: form validation, the conversation
//! guard, list queries and the help desk service that ties them together.

pub mod commands;
pub mod conversation;
pub mod dto;
pub mod forms;
pub mod queries;

pub use commands::HelpDesk;
pub use conversation::{Conversation, ConversationError};
pub use dto::TicketReceipt;
pub use forms::{FieldError, FormErrors, FormField, FormRules, TicketForm};
pub use queries::{TicketFilter, TicketSummary};
