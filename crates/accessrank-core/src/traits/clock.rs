use std::cell::Cell;

use chrono::{DateTime, Duration, FixedOffset, Local};

/// Source of the current local wall-clock time.
///
/// Drives the hour/weekday stamp on each transition and the
/// time-of-last-visit used for tie-breaking.
pub trait IClock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Seconds since the Unix epoch, with sub-second precision.
pub fn epoch_seconds(time: &DateTime<FixedOffset>) -> f64 {
    time.timestamp() as f64 + f64::from(time.timestamp_subsec_nanos()) / 1e9
}

/// The host's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl IClock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().into()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<DateTime<FixedOffset>>,
}

impl ManualClock {
    pub fn new(start: DateTime<FixedOffset>) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, time: DateTime<FixedOffset>) {
        self.now.set(time);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl IClock for ManualClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.now.get()
    }
}
