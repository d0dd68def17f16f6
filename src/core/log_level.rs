//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
///
/// Ordered from most severe (`Fatal`, ordinal 0) to least severe (`Trace`).
/// A logger's threshold is the least severe level it still emits, so a record
/// passes when `record_level <= threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Fatal = 0,
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    /// All levels, most severe first
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Fatal => "FATAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    /// Parse a free-form level name, falling back to [`LogLevel::Info`].
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Empty or unknown names never fail.
    ///
    /// ```
    /// use logk::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("debug"), LogLevel::Debug);
    /// assert_eq!(LogLevel::parse("bogus"), LogLevel::Info);
    /// assert_eq!(LogLevel::parse(""), LogLevel::Info);
    /// ```
    pub fn parse(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Fixed-width bracketed tag that opens a text line
    pub fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Fatal => "[FATAL] > ",
            LogLevel::Error => "[ERROR] > ",
            LogLevel::Warn => "[WARN]  > ",
            LogLevel::Info => "[INFO]  > ",
            LogLevel::Debug => "[DEBUG] > ",
            LogLevel::Trace => "[TRACE] > ",
        }
    }

    /// Whether a record at this level passes a logger with `threshold`
    #[inline]
    pub fn enabled_at(&self, threshold: LogLevel) -> bool {
        *self <= threshold
    }

    #[cfg(feature = "console")]
    pub fn color(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Fatal => BrightRed,
            LogLevel::Error => Red,
            LogLevel::Warn => Yellow,
            LogLevel::Info => Green,
            LogLevel::Debug => Blue,
            LogLevel::Trace => BrightBlack,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "FATAL" => Ok(LogLevel::Fatal),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}
