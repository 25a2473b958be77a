//! Sample tickets for demos and local runs
//!
//! Built only through store operations, so the fixtures obey the same
//! invariants as live tickets.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::aggregates::{NewTicket, TicketStatus};
use crate::domain::value_objects::{Email, Priority, Sender, TicketId};
use crate::error::StoreResult;
use crate::infrastructure::ReplayClock;
use crate::store::TicketStore;

/// Load two sample threads with their historical timestamps: a waiting
/// feature request and an active dashboard outage (the newer of the two).
///
/// `clock` must be the clock `store` was built with. It is pinned while the
/// history is replayed and released afterwards. Returns ids oldest first.
pub fn seed_demo_tickets(store: &TicketStore, clock: &ReplayClock) -> StoreResult<Vec<TicketId>> {
    let seeded = replay(store, clock);
    clock.unpin();
    let ids = seeded?;
    tracing::info!(tickets = ids.len(), "Demo tickets loaded");
    Ok(ids)
}

fn replay(store: &TicketStore, clock: &ReplayClock) -> StoreResult<Vec<TicketId>> {
    clock.pin(at(14, 14, 20));
    let dark_mode = store.create(NewTicket::new(
        Email::new_unchecked("user@example.com"),
        "Feature request: Dark mode",
        "Would it be possible to add a dark mode option to the interface? It would be very helpful for users who work during night hours.",
        Priority::Low,
    ));
    clock.pin(at(14, 15, 0));
    store.append_message(
        dark_mode.id(),
        "Thanks for the suggestion! We'll consider this for our next update.",
        Sender::Admin,
    )?;

    clock.pin(at(15, 10, 30));
    let dashboard = store.create(NewTicket::new(
        Email::new_unchecked("user@example.com"),
        "Unable to access dashboard",
        "I am unable to access my dashboard after the recent update. Getting a 404 error when I try to navigate to the dashboard page.",
        Priority::High,
    ));
    clock.pin(at(15, 11, 0));
    store.append_message(
        dashboard.id(),
        "Thank you for reporting this issue. We are investigating this problem and will get back to you soon with a solution.",
        Sender::Admin,
    )?;
    store.set_status(dashboard.id(), TicketStatus::Active)?;

    Ok(vec![dark_mode.id().clone(), dashboard.id().clone()])
}

fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, minute, 0)
        .single()
        .unwrap_or_else(Utc::now)
}
