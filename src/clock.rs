//! Clock abstraction for timestamping log lines
//!
//! The file sink's filename is partitioned by calendar day and every line
//! carries a millisecond timestamp, so tests need a way to pin time. The
//! logger takes a [`Clock`] and production code uses [`SystemClock`].

use chrono::{DateTime, Local};

/// Source of the current wall-clock time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// System clock, used outside of tests
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock pinned to a fixed instant, for tests that assert on dates
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
