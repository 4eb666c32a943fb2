use chrono::{DateTime, Datelike, TimeZone, Timelike};

use crate::constants::HOUR_SLOT_RADIUS;

/// When a transition was observed: local hour and weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemVisit {
    /// Hour of day (0–23).
    pub hour: u32,
    /// Day of week (Sun=1 .. Sat=7).
    pub weekday: u32,
}

impl ItemVisit {
    pub fn new(hour: u32, weekday: u32) -> Self {
        Self { hour, weekday }
    }

    /// Capture the hour and weekday of a wall-clock time.
    pub fn at<Tz: TimeZone>(time: &DateTime<Tz>) -> Self {
        Self {
            hour: time.hour(),
            weekday: time.weekday().number_from_sunday(),
        }
    }
}

/// True if `hour` lies within [`HOUR_SLOT_RADIUS`] of `slot`.
///
/// The window does not wrap at midnight: the slot at 0 covers 0 and 1 only.
pub fn in_hour_slot(hour: u32, slot: u32) -> bool {
    hour + HOUR_SLOT_RADIUS >= slot && hour <= slot + HOUR_SLOT_RADIUS
}
