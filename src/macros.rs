//! Logging macros for formatted messages.
//!
//! Each macro forwards to the matching `*f` method of [`Logger`](crate::Logger)
//! with `format_args!`, so arguments are only rendered when the record passes
//! the logger's threshold. They accept any logger expression: a
//! [`StdLogger`](crate::StdLogger), a reference, or a
//! [`SharedLogger`](crate::SharedLogger).
//!
//! # Examples
//!
//! ```
//! use logk::prelude::*;
//! use logk::info;
//!
//! let logger = StdLogger::builder().printer(MemoryPrinter::new()).build();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a formatted message at a runtime-chosen level.
///
/// # Examples
///
/// ```
/// # use logk::prelude::*;
/// # let logger = StdLogger::builder().printer(MemoryPrinter::new()).build();
/// use logk::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        match $level {
            $crate::LogLevel::Fatal => $logger.fatalf(format_args!($($arg)+)),
            $crate::LogLevel::Error => $logger.errorf(format_args!($($arg)+)),
            $crate::LogLevel::Warn => $logger.warnf(format_args!($($arg)+)),
            $crate::LogLevel::Info => $logger.infof(format_args!($($arg)+)),
            $crate::LogLevel::Debug => $logger.debugf(format_args!($($arg)+)),
            $crate::LogLevel::Trace => $logger.tracef(format_args!($($arg)+)),
        }
    }};
}

/// Log a formatted fatal-level message. Does not terminate the process.
///
/// # Examples
///
/// ```
/// # use logk::prelude::*;
/// # let logger = StdLogger::builder().printer(MemoryPrinter::new()).build();
/// use logk::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.fatalf(format_args!($($arg)+))
    }};
}

/// Log a formatted error-level message.
///
/// # Examples
///
/// ```
/// # use logk::prelude::*;
/// # let logger = StdLogger::builder().printer(MemoryPrinter::new()).build();
/// use logk::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.errorf(format_args!($($arg)+))
    }};
}

/// Log a formatted warning-level message.
///
/// # Examples
///
/// ```
/// # use logk::prelude::*;
/// # let logger = StdLogger::builder().printer(MemoryPrinter::new()).build();
/// use logk::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.warnf(format_args!($($arg)+))
    }};
}

/// Log a formatted info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.infof(format_args!($($arg)+))
    }};
}

/// Log a formatted debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.debugf(format_args!($($arg)+))
    }};
}

/// Log a formatted trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.tracef(format_args!($($arg)+))
    }};
}
