//! Printer trait for log output destinations

use super::log_level::LogLevel;
use super::options::Options;

/// Renders and delivers a single log record.
///
/// `msg` is always the final message text, also for the formatted `*f`
/// logging variants.
///
/// Loggers never inspect what a printer does with a record. Implementations
/// must not panic or propagate failures: a failed write is dropped.
pub trait Printer: Send + Sync {
    fn print(&self, namespace: &str, level: LogLevel, msg: &str, options: &Options<'_>);
}
