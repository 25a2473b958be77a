//! Help desk demo - runs a scripted support conversation against an
//! in-memory store and prints the resulting tickets as JSON.

use std::sync::Arc;

use helpdesk_core::infrastructure::{seed_demo_tickets, BroadcastEventPublisher, ReplayClock, SequentialIdGenerator};
use helpdesk_core::{DeskConfig, HelpDesk, Priority, TicketFilter, TicketForm, TicketStatus, TicketStore, TicketUseCases};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Help desk demo v{}", env!("CARGO_PKG_VERSION"));

    let config = DeskConfig::from_env();
    config.validate()?;

    let clock = Arc::new(ReplayClock::new());
    let store = Arc::new(
        TicketStore::new(Arc::new(SequentialIdGenerator::from_config(&config)), clock.clone())
            .with_event_buffer(config.event_buffer),
    );
    if config.seed_demo_data {
        seed_demo_tickets(&store, &clock)?;
    }

    let publisher = Arc::new(BroadcastEventPublisher::new(config.event_buffer));
    let mut events = publisher
        .subscribe()
        .ok_or_else(|| anyhow::anyhow!("event publisher closed before startup"))?;
    let listener = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            tracing::info!(ticket_id = %event.ticket_id(), event = ?event, "Ticket event");
        }
    });

    let desk = HelpDesk::from_config(&config, store.clone(), publisher.clone());

    let receipt = desk
        .raise_ticket(TicketForm::new(
            "jane@example.com",
            "Password reset email never arrives",
            "I requested a password reset three times today and nothing reached my inbox.",
            Priority::Medium,
        ))
        .await?;
    tracing::info!(ticket_id = %receipt.ticket_id, "Ticket submitted");

    desk.reply_as_admin(&receipt.ticket_id, "Could you check your spam folder?").await?;
    desk.send_user_message(&receipt.ticket_id, "Found it in spam, thanks!").await?;
    desk.update_status(&receipt.ticket_id, TicketStatus::Resolved).await?;

    if let Err(e) = desk.send_user_message(&receipt.ticket_id, "One more question").await {
        tracing::info!(error = %e, "Follow-up refused");
    }

    let summary = desk.summary().await?;
    tracing::info!(total = summary.total, waiting = summary.waiting, active = summary.active, resolved = summary.resolved, "Summary");

    let tickets = desk.list_tickets(&TicketFilter::new()).await?;
    println!("{}", serde_json::to_string_pretty(&tickets)?);

    publisher.shutdown();
    listener.await?;
    Ok(())
}
