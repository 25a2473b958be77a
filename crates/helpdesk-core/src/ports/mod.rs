//! Ports module (Hexagonal Architecture)
//!
//! Interfaces the store and the help desk service depend on, and the use
//! cases they offer to callers.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
