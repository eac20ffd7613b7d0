//! Calendar expansion and week/weekend indexing.
//!
//! All index math is anchored on the generation start date, which callers
//! validate to be a Sunday. Weeks are whole 7-day blocks from that Sunday;
//! weekend pair k is the Saturday `start - 1 + 7k` together with the Sunday
//! `start + 7k`, so the pair spanning the range boundary is complete.

use crate::types::{DayOffset, WeekIndex, WeekendIndex};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Expand (start, weeks) into the ordered day sequence.
///
/// When `start` is a Sunday the immediately preceding Saturday is prepended
/// so the first weekend pair is complete. Non-Sunday starts are not
/// rejected here (request validation happens upstream) and expand to
/// exactly `weeks * 7` days.
pub fn expand(start: NaiveDate, weeks: u32) -> Vec<NaiveDate> {
    let mut days = Vec::with_capacity(weeks as usize * 7 + 1);
    if start.weekday() == Weekday::Sun {
        days.push(start - Duration::days(1));
    }
    for i in 0..i64::from(weeks) * 7 {
        days.push(start + Duration::days(i));
    }
    days
}

/// Signed day count from the start date. The prepended Saturday is -1.
pub fn day_offset(start: NaiveDate, d: NaiveDate) -> DayOffset {
    (d - start).num_days()
}

/// Whole 7-day blocks from the start date (Euclidean, so the prepended
/// Saturday lands in week -1).
pub fn week_index(start: NaiveDate, d: NaiveDate) -> WeekIndex {
    day_offset(start, d).div_euclid(7)
}

/// The weekend pair a Saturday or Sunday belongs to. None on weekdays.
pub fn weekend_index(start: NaiveDate, d: NaiveDate) -> Option<WeekendIndex> {
    match d.weekday() {
        // A Saturday pairs with the Sunday that follows it.
        Weekday::Sat => Some(day_offset(start, d + Duration::days(1)).div_euclid(7)),
        Weekday::Sun => Some(day_offset(start, d).div_euclid(7)),
        _ => None,
    }
}

/// The Saturday of weekend pair k. Used to date pair-level log entries.
pub fn weekend_saturday(start: NaiveDate, k: WeekendIndex) -> NaiveDate {
    start + Duration::days(7 * k - 1)
}

/// The first weekday (Monday) of week w. Weekly roles are computed from
/// this day's availability.
pub fn first_weekday_of(start: NaiveDate, w: WeekIndex) -> NaiveDate {
    start + Duration::days(7 * w + 1)
}

pub fn is_weekend(d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Three-letter day name, matching the roster's display convention.
pub fn day_name(d: NaiveDate) -> &'static str {
    match d.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// The nearest Sunday at or before `d`. Runners use this to default the
/// start date when none is given.
pub fn nearest_previous_sunday(d: NaiveDate) -> NaiveDate {
    d - Duration::days(i64::from(d.weekday().num_days_from_sunday()))
}
