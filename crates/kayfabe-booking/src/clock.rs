//! # Clock — Injectable Time Source
//!
//! The booker never reads system time directly. "Now" comes from an
//! injected [`Clock`], is captured once per `handle()` call, and is
//! reused for every mutation in that call, so a single transition is
//! internally consistent and fully deterministic under test.

use kayfabe_core::Timestamp;

/// Source of the current time for the booking office.
pub trait Clock {
    /// The current time.
    fn now(&self) -> Timestamp;
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// A clock pinned to one instant, for tests and reproducible runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
