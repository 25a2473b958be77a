//! Read-side queries over a ticket snapshot
//!
//! Stateless: nothing here touches the store, only the tickets handed in.

use serde::{Deserialize, Serialize};

use crate::domain::aggregates::{Ticket, TicketStatus};
use crate::domain::value_objects::Priority;

/// List filter. Unset criteria match everything.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketFilter {
    /// Case-insensitive substring of the ticket id or subject
    pub search: Option<String>,
    pub status: Option<TicketStatus>,
    pub priority: Option<Priority>,
}

impl TicketFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn status(mut self, status: TicketStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn matches(&self, ticket: &Ticket) -> bool {
        let matches_search = self.search.as_deref().map_or(true, |term| {
            let term = term.to_lowercase();
            ticket.subject().to_lowercase().contains(&term) || ticket.id().as_str().to_lowercase().contains(&term)
        });
        matches_search
            && self.status.map_or(true, |s| ticket.status() == s)
            && self.priority.map_or(true, |p| ticket.priority() == p)
    }

    /// Matching tickets, order preserved.
    pub fn apply<'a>(&self, tickets: impl IntoIterator<Item = &'a Ticket>) -> Vec<Ticket> {
        tickets.into_iter().filter(|t| self.matches(t)).cloned().collect()
    }
}

/// Ticket counts per status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TicketSummary {
    pub total: usize,
    pub waiting: usize,
    pub active: usize,
    pub resolved: usize,
}

impl TicketSummary {
    pub fn from_tickets<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> Self {
        tickets.into_iter().fold(Self::default(), |mut summary, ticket| {
            summary.total += 1;
            match ticket.status() {
                TicketStatus::Waiting => summary.waiting += 1,
                TicketStatus::Active => summary.active += 1,
                TicketStatus::Resolved => summary.resolved += 1,
            }
            summary
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::TicketForm;
    use crate::domain::value_objects::Sender;
    use crate::store::TicketStore;

    fn sample() -> Vec<Ticket> {
        let store = TicketStore::default();
        let dashboard = store.create(
            TicketForm::new("user@example.com", "Unable to access dashboard", "Getting a 404 error on the dashboard page.", Priority::High)
                .validate()
                .unwrap(),
        );
        store.append_message(dashboard.id(), "still broken", Sender::User).unwrap();
        store.create(
            TicketForm::new("user@example.com", "Feature request: Dark mode", "Would it be possible to add a dark mode?", Priority::Low)
                .validate()
                .unwrap(),
        );
        store.snapshot()
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let tickets = sample();
        assert_eq!(TicketFilter::new().apply(&tickets).len(), 2);
        assert_eq!(TicketFilter::new().search("").apply(&tickets).len(), 2);
    }

    #[test]
    fn test_search_subject_case_insensitive() {
        let tickets = sample();
        let found = TicketFilter::new().search("DARK").apply(&tickets);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].subject(), "Feature request: Dark mode");
    }

    #[test]
    fn test_search_by_id() {
        let tickets = sample();
        let found = TicketFilter::new().search("tkt001").apply(&tickets);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id().as_str(), "TKT001");
    }

    #[test]
    fn test_status_and_priority_combine() {
        let tickets = sample();
        assert_eq!(TicketFilter::new().status(TicketStatus::Active).apply(&tickets).len(), 1);
        assert_eq!(TicketFilter::new().status(TicketStatus::Active).priority(Priority::Low).apply(&tickets).len(), 0);
        assert_eq!(TicketFilter::new().priority(Priority::Low).apply(&tickets).len(), 1);
    }

    #[test]
    fn test_summary() {
        let summary = TicketSummary::from_tickets(&sample());
        assert_eq!(summary, TicketSummary { total: 2, waiting: 1, active: 1, resolved: 0 });
    }
}
