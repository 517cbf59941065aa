//! Timestamp display in the system time zone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS TZ` in the system time zone.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Formats fractional hours compactly: `2h`, `1.5h`, `0.75h`.
pub struct Hours(pub f64);

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.0 * 100.0).round() / 100.0;
        write!(f, "{rounded}h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours() {
        assert_eq!(Hours(2.0).to_string(), "2h");
        assert_eq!(Hours(1.2).to_string(), "1.2h");
        assert_eq!(Hours(2.0 - 2.0 * 0.6).to_string(), "0.8h");
        assert_eq!(Hours(0.333333).to_string(), "0.33h");
    }

    #[test]
    fn test_local_datetime_shape() {
        let ts: Timestamp = "2025-01-01T12:00:00Z".parse().unwrap();
        let text = LocalDateTime(&ts).to_string();
        assert!(text.starts_with("2025-01-0"), "{text}");
        assert!(text.len() > "2025-01-01 12:00:00".len());
    }
}
