use std::fmt::Display;

use chrono::{DateTime, TimeZone};

/// How often the home page clock refreshes, in milliseconds.
pub const TICK_MS: u64 = 1000;

/// 24-hour "HH:MM".
pub fn format_time<Tz>(instant: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant.format("%H:%M").to_string()
}

/// Short weekday, short month, unpadded day, e.g. "Fri, Oct 16".
pub fn format_date<Tz>(instant: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant.format("%a, %b %-d").to_string()
}

/// Build date stamped by the build script, as "YYYY-MM-DD".
pub const BUILD_DATE: &str = env!("BUILD_DATE");

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_time_is_24h_zero_padded() {
        let t = Utc.with_ymd_and_hms(2026, 10, 16, 9, 5, 59).unwrap();
        assert_eq!(format_time(&t), "09:05");
        let t = Utc.with_ymd_and_hms(2026, 10, 16, 23, 0, 0).unwrap();
        assert_eq!(format_time(&t), "23:00");
    }

    #[test]
    fn test_format_date() {
        let t = Utc.with_ymd_and_hms(2026, 10, 16, 9, 5, 0).unwrap();
        assert_eq!(format_date(&t), "Fri, Oct 16");
        let t = Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap();
        assert_eq!(format_date(&t), "Mon, Mar 2");
    }

    #[test]
    fn test_build_date_shape() {
        assert_eq!(BUILD_DATE.len(), 10);
        assert_eq!(&BUILD_DATE[4..5], "-");
        assert_eq!(&BUILD_DATE[7..8], "-");
    }
}
