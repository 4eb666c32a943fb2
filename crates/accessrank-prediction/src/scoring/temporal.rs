//! Hour-of-day and day-of-week weighting.
//!
//! ```text
//! rh = count(item, current ±1h slot) / mean(count(item, slot)) over slots at 1, 4, ... 22
//! rd = count(item, current weekday)  / mean(count(item, weekday)) over the 7 weekdays
//! time = clamp(rh × rd, 0.8, 1.25) ^ 0.25
//! ```
//!
//! Each ratio stays at 1.0 until at least 10 transitions (to any item) were
//! observed in the current hour slot, or on the current weekday. The hour
//! slot does not wrap: at hour 0 it covers hours 0 and 1 only.

use std::collections::HashMap;

use accessrank_core::constants::{
    FIRST_AVERAGING_HOUR, HOUR_SLOT_STRIDE, MIN_TIME_OBSERVATIONS, TIME_RATIO_MAX,
    TIME_RATIO_MIN, TIME_WEIGHT_EXPONENT,
};
use accessrank_core::models::item_visit::in_hour_slot;
use accessrank_core::models::{ItemState, ItemVisit};

type HourHistogram = [u32; 24];
type WeekdayHistogram = [u32; 7];

/// Transition counts per destination item, bucketed by hour and weekday.
///
/// Built once per list update so every candidate is scored against the same
/// snapshot of history.
#[derive(Debug, Clone)]
pub struct TemporalProfile<'a> {
    now: ItemVisit,
    by_hour: HashMap<&'a str, HourHistogram>,
    by_weekday: HashMap<&'a str, WeekdayHistogram>,
    current_slot_total: u32,
    current_weekday_total: u32,
}

impl<'a> TemporalProfile<'a> {
    pub fn build(items: &'a HashMap<String, ItemState>, now: ItemVisit) -> Self {
        let mut by_hour: HashMap<&'a str, HourHistogram> = HashMap::new();
        let mut by_weekday: HashMap<&'a str, WeekdayHistogram> = HashMap::new();

        for state in items.values() {
            for (to, visits) in &state.next_visits {
                let hours = by_hour.entry(to.as_str()).or_insert([0; 24]);
                let weekdays = by_weekday.entry(to.as_str()).or_insert([0; 7]);
                for visit in visits {
                    hours[(visit.hour % 24) as usize] += 1;
                    if let Some(slot) = weekday_index(visit.weekday) {
                        weekdays[slot] += 1;
                    }
                }
            }
        }

        let current_slot_total = by_hour
            .values()
            .map(|hist| slot_count(hist, now.hour))
            .sum();
        let current_weekday_total = weekday_index(now.weekday).map_or(0, |slot| {
            by_weekday.values().map(|hist| hist[slot]).sum()
        });

        Self {
            now,
            by_hour,
            by_weekday,
            current_slot_total,
            current_weekday_total,
        }
    }

    /// Total transitions observed in the current ±1 hour slot, across all items.
    pub fn current_slot_total(&self) -> u32 {
        self.current_slot_total
    }

    /// Total transitions observed on the current weekday, across all items.
    pub fn current_weekday_total(&self) -> u32 {
        self.current_weekday_total
    }

    /// Hour-of-day ratio `rh` for `item`.
    pub fn hour_ratio(&self, item: &str) -> f64 {
        if self.current_slot_total < MIN_TIME_OBSERVATIONS {
            return 1.0;
        }
        let empty = [0; 24];
        let hist = self.by_hour.get(item).unwrap_or(&empty);

        let averaging_hours = (FIRST_AVERAGING_HOUR..24).step_by(HOUR_SLOT_STRIDE as usize);
        let slots = averaging_hours.clone().count() as f64;
        let total: u32 = averaging_hours.map(|hour| slot_count(hist, hour)).sum();

        ratio(slot_count(hist, self.now.hour), f64::from(total) / slots)
    }

    /// Day-of-week ratio `rd` for `item`.
    pub fn weekday_ratio(&self, item: &str) -> f64 {
        if self.current_weekday_total < MIN_TIME_OBSERVATIONS {
            return 1.0;
        }
        let empty = [0; 7];
        let hist = self.by_weekday.get(item).unwrap_or(&empty);
        let count = weekday_index(self.now.weekday).map_or(0, |slot| hist[slot]);
        let total: u32 = hist.iter().sum();

        ratio(count, f64::from(total) / 7.0)
    }

    /// Damped, clamped product of both ratios.
    pub fn weight(&self, item: &str) -> f64 {
        let combined = self.hour_ratio(item) * self.weekday_ratio(item);
        combined
            .clamp(TIME_RATIO_MIN, TIME_RATIO_MAX)
            .powf(TIME_WEIGHT_EXPONENT)
    }
}

/// Transitions within one hour of `hour`. Hours 23 and 0 are not neighbours.
fn slot_count(hist: &HourHistogram, hour: u32) -> u32 {
    (0..24u32)
        .filter(|&h| in_hour_slot(h, hour))
        .map(|h| hist[h as usize])
        .sum()
}

fn weekday_index(weekday: u32) -> Option<usize> {
    (1..=7).contains(&weekday).then(|| (weekday - 1) as usize)
}

// An item with no history at all scores the lowest ratio rather than 0/0.
fn ratio(count: u32, average: f64) -> f64 {
    if average > 0.0 {
        f64::from(count) / average
    } else {
        0.0
    }
}
