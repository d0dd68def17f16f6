//! Process-wide logger registry
//!
//! Holds at most one active [`SharedLogger`] behind a reader/writer lock.
//! The slot starts empty; [`get`] fills it on first use with a [`StdLogger`]
//! configured from `LOG_LEVEL` and `LOG_NAMESPACE` that prints to stdout.
//! [`register`] and [`clear`] may replace or empty it at any time; concurrent
//! writers are last-writer-wins.

use super::{
    error::LoggerError,
    logger::{LoggerBuilder, SharedLogger},
    options::Setter,
    printer::Printer,
};
use crate::printers::StdPrinter;
use parking_lot::{const_rwlock, RwLock};
use std::sync::Arc;

/// Environment variable holding the default logger's level
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Environment variable holding the default logger's namespace
pub const ENV_LOG_NAMESPACE: &str = "LOG_NAMESPACE";

/// Trace record emitted once by a freshly created default logger
const BOOTSTRAP_MESSAGE: &str = "No logger found. StdLogger initiated";

static ACTIVE: RwLock<Option<SharedLogger>> = const_rwlock(None);

/// Active logger, creating the default one if none is registered.
///
/// Concurrent first calls create exactly one default logger, which announces
/// itself with a single trace record.
pub fn get() -> SharedLogger {
    get_or_init_with(|| Arc::new(StdPrinter::stdout()) as Arc<dyn Printer>)
}

/// [`get`] with the default logger's printer supplied by `make_printer`,
/// called at most once and only when the slot is empty.
pub(crate) fn get_or_init_with<F>(make_printer: F) -> SharedLogger
where
    F: FnOnce() -> Arc<dyn Printer>,
{
    if let Some(logger) = ACTIVE.read().as_ref() {
        return logger.clone();
    }

    let logger = {
        let mut slot = ACTIVE.write();
        if let Some(logger) = slot.as_ref() {
            return logger.clone();
        }

        let logger = LoggerBuilder::from_env()
            .shared_printer(make_printer())
            .build()
            .into_shared();
        *slot = Some(logger.clone());
        logger
    };

    logger.trace(BOOTSTRAP_MESSAGE, &[]);
    logger
}

/// Replace the active logger.
///
/// # Panics
///
/// Registering `None` is a programming error and panics.
pub fn register(logger: impl Into<Option<SharedLogger>>) {
    let Some(logger) = logger.into() else {
        panic!("{}", LoggerError::NilLogger);
    };

    *ACTIVE.write() = Some(logger);
}

/// Empty the registry; the next [`get`] creates a fresh default logger
pub fn clear() {
    *ACTIVE.write() = None;
}

/// Derive a child of the active logger
pub fn new_child(setters: &[Setter]) -> SharedLogger {
    get().new_child(setters)
}
