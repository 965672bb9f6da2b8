//! Wall-clock helpers for the planning simulation.
//!
//! # Design
//!
//! The planner tracks time as a `chrono::NaiveDateTime` — trips are planned
//! in the traveller's local time and never cross into timezone arithmetic,
//! so naive datetimes are the right resolution.  Charging durations come out
//! of the energy model as fractional hours; [`hours_delta`] converts them to
//! a `TimeDelta` with whole-second rounding so repeated additions cannot
//! accumulate sub-second drift.

use chrono::{NaiveDateTime, TimeDelta};

/// Convert fractional hours (e.g. a charging duration) into a `TimeDelta`,
/// rounded to the nearest whole second.
#[inline]
pub fn hours_delta(hours: f64) -> TimeDelta {
    TimeDelta::seconds((hours * 3_600.0).round() as i64)
}

/// The wall-clock instant at which leg `leg_index` (0-based) begins.
///
/// Legs run one per day: leg `i` starts on day `start_date + i` at
/// `daily_start_hour` o'clock.
#[inline]
pub fn leg_start(start_date: NaiveDateTime, leg_index: usize, daily_start_hour: u32) -> NaiveDateTime {
    start_date
        + TimeDelta::days(leg_index as i64)
        + TimeDelta::hours(i64::from(daily_start_hour))
}
