//! Ticket lifecycle scenarios against the public API.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use helpdesk_core::infrastructure::{FixedClock, NoOpEventPublisher, SequentialIdGenerator};
use helpdesk_core::{
    HelpDesk, Priority, Sender, StoreError, TicketFilter, TicketForm, TicketId, TicketStatus, TicketStore,
    TicketUseCases,
};

fn store() -> TicketStore {
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap());
    TicketStore::new(Arc::new(SequentialIdGenerator::default()), Arc::new(clock))
}

fn scenario_form() -> TicketForm {
    TicketForm::new("a@b.com", "X", "issue detail text", Priority::Low)
}

#[test]
fn created_ticket_waits_with_description_as_first_message() {
    let store = store();
    let ticket = store.create(scenario_form().validate().unwrap());

    assert_eq!(ticket.status(), TicketStatus::Waiting);
    assert_eq!(ticket.messages().len(), 1);
    assert_eq!(ticket.messages()[0].content(), "issue detail text");
    assert_eq!(ticket.messages()[0].sender(), Sender::User);
    assert_eq!(ticket.email().as_str(), "a@b.com");
    assert_eq!(ticket.subject(), "X");
    assert_eq!(ticket.priority(), Priority::Low);
}

#[test]
fn user_message_activates_ticket() {
    let store = store();
    let id = store.create(scenario_form().validate().unwrap()).id().clone();

    store.append_message(&id, "please help", Sender::User).unwrap();

    let ticket = store.get_by_id(&id).unwrap();
    assert_eq!(ticket.status(), TicketStatus::Active);
    assert_eq!(ticket.messages().len(), 2);
    assert_eq!(ticket.last_message(), Some("please help"));
}

#[test]
fn admin_message_leaves_ticket_waiting() {
    let store = store();
    let id = store.create(scenario_form().validate().unwrap()).id().clone();

    store.append_message(&id, "we are looking into it", Sender::Admin).unwrap();

    assert_eq!(store.get_by_id(&id).unwrap().status(), TicketStatus::Waiting);
}

#[test]
fn override_to_resolved_survives_later_messages() {
    let store = store();
    let id = store.create(scenario_form().validate().unwrap()).id().clone();
    store.set_status(&id, TicketStatus::Resolved).unwrap();

    store.append_message(&id, "thanks, all good", Sender::User).unwrap();

    let ticket = store.get_by_id(&id).unwrap();
    assert_eq!(ticket.status(), TicketStatus::Resolved);
    assert_eq!(ticket.messages().last().unwrap().content(), "thanks, all good");
}

#[test]
fn reads_are_idempotent() {
    let store = store();
    let id = store.create(scenario_form().validate().unwrap()).id().clone();
    store.append_message(&id, "please help", Sender::User).unwrap();

    assert_eq!(store.get_by_id(&id), store.get_by_id(&id));
    assert_eq!(store.snapshot(), store.snapshot());
}

#[test]
fn missing_ticket_is_absent_not_an_error() {
    let store = store();
    let missing = TicketId::from("missing-id");

    assert!(store.get_by_id(&missing).is_none());
    assert_eq!(store.set_status(&missing, TicketStatus::Active), Err(StoreError::NotFound(missing)));
    assert!(store.snapshot().is_empty());
}

#[test]
fn help_desk_end_to_end() {
    tokio_test::block_on(async {
        let desk = HelpDesk::new(Arc::new(store()), Arc::new(NoOpEventPublisher));

        let receipt = desk.raise_ticket(scenario_form()).await.unwrap();
        assert_eq!(receipt.ticket_id.as_str(), "TKT001");

        desk.send_user_message(&receipt.ticket_id, "please help").await.unwrap();
        desk.reply_as_admin(&receipt.ticket_id, "Fixed on our side").await.unwrap();
        desk.update_status(&receipt.ticket_id, TicketStatus::Resolved).await.unwrap();

        let resolved = desk.list_tickets(&TicketFilter::new().status(TicketStatus::Resolved)).await.unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].last_message(), Some("Fixed on our side"));
        assert!(desk.send_user_message(&receipt.ticket_id, "reopen?").await.is_err());
    });
}
