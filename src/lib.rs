//! # logk
//!
//! A leveled, namespaced logging facade. Application code talks to the
//! [`Logger`] trait; the concrete output is a [`Printer`] chosen at runtime.
//!
//! ## Features
//!
//! - **Global registry**: [`get`], [`register`], [`clear`] and [`new_child`]
//!   manage one process-wide logger, created from `LOG_LEVEL` and
//!   `LOG_NAMESPACE` on first use
//! - **Level gating**: records less severe than the threshold never reach the
//!   printer, and formatted records are never rendered
//! - **Child loggers**: share the printer and threshold, inherit or override
//!   the namespace
//! - **Per-call options**: context with request id, metadata, carried error
//! - **Printers**: text ([`StdPrinter`]), JSON ([`JsonPrinter`]), in-memory
//!   ([`MemoryPrinter`]) or your own
//!
//! ## Example
//!
//! ```
//! use logk::prelude::*;
//! use std::sync::Arc;
//!
//! let printer = Arc::new(MemoryPrinter::new());
//! let logger = StdLogger::builder()
//!     .level(LogLevel::Debug)
//!     .namespace("api")
//!     .shared_printer(printer.clone())
//!     .build();
//! logk::register(logger.into_shared());
//!
//! let users = logk::new_child(&[options::with_namespace("users")]);
//! users.info("user created", &[options::with_field("id", 7)]);
//! logk::warn!(users, "quota at {}%", 90);
//! users.trace("dropped", &[]);
//!
//! let records = printer.records();
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].namespace, "users");
//! assert_eq!(records[1].message, "quota at 90%");
//! # logk::clear();
//! ```

pub mod core;
pub mod macros;
pub mod printers;

pub mod prelude {
    pub use crate::core::options;
    pub use crate::core::{
        Context, LogLevel, Logger, LoggerBuilder, LoggerError, Metadata, OptionValue, Options,
        Printer, Result, Setter, SharedLogger, StdLogger, TimestampFormat,
    };
    pub use crate::printers::{JsonPrinter, MemoryPrinter, PrintedRecord, StdPrinter};
}

pub use crate::core::registry::{clear, get, new_child, register};
pub use crate::core::{
    options, CancelHandle, Context, LogLevel, Logger, LoggerBuilder, LoggerError, Metadata,
    OptionValue, Options, Printer, Result, Setter, SharedError, SharedLogger, StdLogger,
    TimestampFormat, ENV_LOG_LEVEL, ENV_LOG_NAMESPACE, ERROR_KEY,
};
pub use printers::{JsonPrinter, MemoryPrinter, PrintedRecord, StdPrinter};
