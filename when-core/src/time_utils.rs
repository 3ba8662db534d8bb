use chrono::{Duration, Local, NaiveDateTime, Timelike};

/// Interval new entries are rounded to.
pub const HALF_HOUR_SECS: u32 = 30 * 60;

/// Current local wall-clock time.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Rounds `dt` to the nearest multiple of `round_to` seconds since midnight.
///
/// Ties round up, and anything past the last interval of the day rolls over
/// into the next day (23:50 rounds to 00:00 with a 30 minute interval).
/// Sub-second precision is dropped.
pub fn round_time(dt: NaiveDateTime, round_to: u32) -> NaiveDateTime {
    let round_to = i64::from(round_to.max(1));
    let seconds = i64::from(dt.num_seconds_from_midnight());
    let rounding = (seconds + round_to / 2) / round_to * round_to;
    let whole = dt.with_nanosecond(0).unwrap_or(dt);
    whole + Duration::seconds(rounding - seconds)
}
