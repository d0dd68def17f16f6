//! Timestamp formatting for printer line prefixes
//!
//! Text printers can stamp each line they write. [`TimestampFormat::Standard`]
//! is the classic `2025/01/08 10:30:45` local-time stamp used by the default
//! stdout printer.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use logk::core::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::Iso8601.format(&at), "2025-01-08T10:30:45.000Z");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Local date and time to the second: `2025/01/08 10:30:45`
    #[default]
    Standard,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45.123456+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format, applied in UTC.
    ///
    /// An invalid format string falls back to [`TimestampFormat::Standard`].
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Standard => datetime
                .with_timezone(&Local)
                .format("%Y/%m/%d %H:%M:%S")
                .to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                match write!(out, "{}", datetime.format(format_str)) {
                    Ok(()) => out,
                    // chrono reports an invalid specifier as a formatting error
                    Err(_) => TimestampFormat::Standard.format(datetime),
                }
            }
        }
    }

    /// Format the current instant
    #[must_use]
    pub fn format_now(&self) -> String {
        self.format(&Utc::now())
    }
}
