//! Domain services

use crate::domain::aggregates::TicketStatus;
use crate::domain::value_objects::Sender;

/// Status a ticket moves to after a message from `sender`.
///
/// Only a user message on a waiting ticket activates it. Admin replies and
/// messages on active or resolved tickets leave the status as it is.
pub fn next_status(current: TicketStatus, sender: Sender) -> TicketStatus {
    match (current, sender) {
        (TicketStatus::Waiting, Sender::User) => TicketStatus::Active,
        (status, _) => status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_activates_waiting() {
        assert_eq!(next_status(TicketStatus::Waiting, Sender::User), TicketStatus::Active);
    }

    #[test]
    fn test_admin_never_changes_status() {
        for status in TicketStatus::ALL {
            assert_eq!(next_status(status, Sender::Admin), status);
        }
    }

    #[test]
    fn test_resolved_stays_resolved() {
        assert_eq!(next_status(TicketStatus::Resolved, Sender::User), TicketStatus::Resolved);
        assert_eq!(next_status(TicketStatus::Active, Sender::User), TicketStatus::Active);
    }
}
