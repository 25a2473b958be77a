//! Clocks

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

use crate::ports::outbound::Clock;

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock for tests and fixtures.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now: Mutex::new(now) }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock() = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

/// Wall clock that can be pinned to a past instant, used to replay history
/// such as demo fixtures into a live store.
#[derive(Debug, Default)]
pub struct ReplayClock {
    pinned: Mutex<Option<DateTime<Utc>>>,
}

impl ReplayClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pin(&self, at: DateTime<Utc>) {
        *self.pinned.lock() = Some(at);
    }

    pub fn unpin(&self) {
        *self.pinned.lock() = None;
    }
}

impl Clock for ReplayClock {
    fn now(&self) -> DateTime<Utc> {
        self.pinned.lock().unwrap_or_else(Utc::now)
    }
}
