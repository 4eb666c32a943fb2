/// AccessRank engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reserved identifier meaning "no current item".
///
/// Never admitted to the prediction list and never reported as a prediction.
pub const SENTINEL_ITEM_ID: &str = "<access_rank_nil>";

/// Rank of an item that has never been placed in the prediction list.
pub const UNRANKED: usize = usize::MAX;

/// Minimum number of observed transitions in the current hour slot (or on the
/// current weekday) before the time ratios depart from 1.0.
pub const MIN_TIME_OBSERVATIONS: u32 = 10;

/// Hours on either side of the current hour counted into its slot.
pub const HOUR_SLOT_RADIUS: u32 = 1;

/// Spacing between the 8 hour slots averaged for the hour-of-day ratio.
pub const HOUR_SLOT_STRIDE: u32 = 3;

/// First of the evenly spaced averaging slots (1, 4, 7, ... 22).
pub const FIRST_AVERAGING_HOUR: u32 = 1;

/// Lower and upper clamp for `rh * rd` before damping.
pub const TIME_RATIO_MIN: f64 = 0.8;
pub const TIME_RATIO_MAX: f64 = 1.25;

/// Damping exponent applied to the clamped time ratio.
pub const TIME_WEIGHT_EXPONENT: f64 = 0.25;
