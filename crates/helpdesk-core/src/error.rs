//! Error types for the help desk

use thiserror::Error;

use crate::application::conversation::ConversationError;
use crate::application::forms::FormErrors;
use crate::domain::value_objects::TicketId;
use crate::ports::outbound::PublishError;

/// The one error the ticket store raises.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("ticket not found: {0}")]
    NotFound(TicketId),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Errors surfaced by the help desk use cases.
#[derive(Error, Debug)]
pub enum DeskError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] FormErrors),

    #[error(transparent)]
    Conversation(ConversationError),

    #[error(transparent)]
    Publish(#[from] PublishError),
}

impl From<ConversationError> for DeskError {
    fn from(e: ConversationError) -> Self {
        match e {
            ConversationError::Store(store) => Self::Store(store),
            other => Self::Conversation(other),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
