//! Wall-clock access for the countdown.
//!
//! The browser reports time as epoch milliseconds and the zone as
//! `Date.getTimezoneOffset()` minutes (positive west of UTC). The pure
//! converters below are testable natively; `now` and `offset_at_local` read
//! the browser clock and only exist with `hydrate`.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::{Duration, OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Convert a JS `getTimezoneOffset()` value to a UTC offset.
///
/// Out-of-range input falls back to UTC.
#[must_use]
pub fn offset_from_js_minutes(minutes: f64) -> UtcOffset {
    if !minutes.is_finite() {
        return UtcOffset::UTC;
    }
    #[allow(clippy::cast_possible_truncation)]
    let seconds = (-minutes.round() as i32).saturating_mul(60);
    UtcOffset::from_whole_seconds(seconds).unwrap_or(UtcOffset::UTC)
}

/// Convert JS epoch milliseconds to a UTC instant. Non-finite input maps to the epoch.
#[must_use]
pub fn instant_from_epoch_ms(epoch_ms: f64) -> OffsetDateTime {
    if !epoch_ms.is_finite() {
        return OffsetDateTime::UNIX_EPOCH;
    }
    #[allow(clippy::cast_possible_truncation)]
    let ms = epoch_ms.trunc() as i64;
    OffsetDateTime::UNIX_EPOCH
        .checked_add(Duration::milliseconds(ms))
        .unwrap_or(OffsetDateTime::UNIX_EPOCH)
}

/// Current browser time.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn now() -> OffsetDateTime {
    instant_from_epoch_ms(js_sys::Date::now())
}

/// Fields for the JS `Date(year, monthIndex, day, hours, minutes, seconds)`
/// constructor, which interprets them as local wall time. `month` is
/// zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JsDateParts {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hours: i32,
    pub minutes: i32,
    pub seconds: i32,
}

#[must_use]
pub fn js_date_parts(local: PrimitiveDateTime) -> JsDateParts {
    JsDateParts {
        year: local.year(),
        month: i32::from(u8::from(local.month())) - 1,
        day: i32::from(local.day()),
        hours: i32::from(local.hour()),
        minutes: i32::from(local.minute()),
        seconds: i32::from(local.second()),
    }
}

/// UTC offset the browser's zone has at the local wall time `local`.
///
/// Unlike the offset "now", this follows daylight-saving transitions
/// between today and `local`.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn offset_at_local(local: PrimitiveDateTime) -> UtcOffset {
    let p = js_date_parts(local);
    let Ok(year) = u32::try_from(p.year) else {
        return UtcOffset::UTC;
    };
    let date = js_sys::Date::new_with_year_month_day_hr_min_sec(year, p.month, p.day, p.hours, p.minutes, p.seconds);
    offset_from_js_minutes(date.get_timezone_offset())
}
