use super::*;
use time::macros::{datetime, offset};

#[test]
fn js_offset_sign_is_inverted() {
    assert_eq!(offset_from_js_minutes(-540.0), offset!(+9));
    assert_eq!(offset_from_js_minutes(300.0), offset!(-5));
    assert_eq!(offset_from_js_minutes(0.0), offset!(UTC));
}

#[test]
fn js_offset_keeps_half_hours() {
    assert_eq!(offset_from_js_minutes(-330.0), offset!(+5:30));
}

#[test]
fn js_offset_garbage_is_utc() {
    assert_eq!(offset_from_js_minutes(f64::NAN), UtcOffset::UTC);
    assert_eq!(offset_from_js_minutes(1.0e9), UtcOffset::UTC);
}

#[test]
fn epoch_ms_maps_to_utc_instant() {
    assert_eq!(instant_from_epoch_ms(0.0), OffsetDateTime::UNIX_EPOCH);
    // 2024-11-10T01:00:00Z
    assert_eq!(instant_from_epoch_ms(1_731_200_400_000.0), datetime!(2024-11-10 01:00:00 UTC));
}

#[test]
fn epoch_ms_drops_fraction() {
    let instant = instant_from_epoch_ms(1_500.9);
    assert_eq!(instant, OffsetDateTime::UNIX_EPOCH + Duration::milliseconds(1500));
}

#[test]
fn epoch_ms_non_finite_is_epoch() {
    assert_eq!(instant_from_epoch_ms(f64::INFINITY), OffsetDateTime::UNIX_EPOCH);
}

#[test]
fn js_date_parts_use_zero_based_month() {
    let parts = js_date_parts(datetime!(2024-11-10 10:00:00));
    assert_eq!(
        parts,
        JsDateParts { year: 2024, month: 10, day: 10, hours: 10, minutes: 0, seconds: 0 }
    );
}

#[test]
fn js_date_parts_january_is_month_zero() {
    let parts = js_date_parts(datetime!(2025-01-02 03:04:05));
    assert_eq!(parts.month, 0);
    assert_eq!((parts.day, parts.hours, parts.minutes, parts.seconds), (2, 3, 4, 5));
}
