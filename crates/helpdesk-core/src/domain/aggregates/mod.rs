//! Aggregates
pub mod ticket;
pub use ticket::{Message, NewTicket, Ticket, TicketStatus};
