//! Timestamp formatting for message rows.

use chrono::{DateTime, Local, TimeZone};

/// Medium date style followed by short time style, e.g. `Jan 5, 2024 at 3:04 PM`
pub const ROW_TIMESTAMP_FORMAT: &str = "%b %-d, %Y at %-I:%M %p";

/// Convert epoch milliseconds to a zoned date-time.
/// Sub-second precision is dropped, matching the whole-second display.
pub fn from_epoch_millis<Tz: TimeZone>(millis: i64, tz: &Tz) -> Option<DateTime<Tz>> {
    let secs = millis.div_euclid(1000);
    DateTime::from_timestamp(secs, 0).map(|utc| utc.with_timezone(tz))
}

/// Format epoch milliseconds in `tz`. Out-of-range values render as an empty
/// string rather than failing the bind.
pub fn format_timestamp_in<Tz: TimeZone>(millis: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    from_epoch_millis(millis, tz)
        .map(|dt| dt.format(ROW_TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}

/// Format epoch milliseconds in the local timezone
pub fn format_timestamp(millis: i64) -> String {
    format_timestamp_in(millis, &Local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_golden_utc() {
        // 2024-01-05T15:04:00.123Z
        assert_eq!(
            format_timestamp_in(1_704_467_040_123, &Utc),
            "Jan 5, 2024 at 3:04 PM"
        );
    }

    #[test]
    fn test_fixed_offset_crosses_midnight() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(
            format_timestamp_in(1_704_467_040_000, &tokyo),
            "Jan 6, 2024 at 12:04 AM"
        );
    }

    #[test]
    fn test_pre_epoch_millis_round_down() {
        // -1ms is 1969-12-31T23:59:59Z, not 1970-01-01T00:00:00Z
        assert_eq!(format_timestamp_in(-1, &Utc), "Dec 31, 1969 at 11:59 PM");
    }

    #[test]
    fn test_out_of_range_is_empty() {
        assert_eq!(format_timestamp_in(i64::MAX, &Utc), "");
    }
}
