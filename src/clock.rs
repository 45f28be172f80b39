//! Time sources for artifact generation.
//!
//! The generator reads the timestamp exactly once per invocation through the
//! [`Clock`] trait. The binary always uses [`SystemClock`]; tests substitute a
//! [`FixedClock`] so generated bytes are deterministic.

use chrono::{DateTime, Local};

/// A source of the current local date/time.
pub trait Clock {
    /// Returns the current local date/time.
    fn now(&self) -> DateTime<Local>;
}

/// Reads the host's wall clock in local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always returns the same instant.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

#[cfg(test)]
impl FixedClock {
    /// A clock pinned to noon local time on the given calendar date.
    pub fn on(year: i32, month: u32, day: u32) -> Self {
        use chrono::TimeZone;
        let instant = Local
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .single()
            .unwrap();
        Self(instant)
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
