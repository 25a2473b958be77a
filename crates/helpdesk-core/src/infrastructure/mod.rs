//! Infrastructure adapters for the outbound ports.

pub mod clock;
pub mod ids;
pub mod publisher;
pub mod seed;

pub use clock::{FixedClock, ReplayClock, SystemClock};
pub use ids::{SequentialIdGenerator, UuidIdGenerator};
pub use publisher::{BroadcastEventPublisher, NoOpEventPublisher};
pub use seed::seed_demo_tickets;
