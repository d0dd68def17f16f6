//! In-memory printer

use crate::core::{LogLevel, Metadata, Options, Printer};
use parking_lot::Mutex;
use serde::Serialize;

/// A record as captured by [`MemoryPrinter`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintedRecord {
    pub namespace: String,
    pub level: LogLevel,
    /// Final message, after formatting
    pub message: String,
    pub request_id: Option<String>,
    /// Carried error, kept at every level
    pub error: Option<String>,
    pub metadata: Metadata,
}

/// Keeps every record it receives, for tests and for embedding applications
/// that want to inspect log output.
///
/// ```
/// use logk::prelude::*;
/// use std::sync::Arc;
///
/// let printer = Arc::new(MemoryPrinter::new());
/// let logger = StdLogger::builder().shared_printer(printer.clone()).build();
///
/// logger.info("captured", &[]);
/// assert_eq!(printer.drain()[0].message, "captured");
/// assert!(printer.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MemoryPrinter {
    records: Mutex<Vec<PrintedRecord>>,
}

impl MemoryPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the captured records, oldest first
    pub fn records(&self) -> Vec<PrintedRecord> {
        self.records.lock().clone()
    }

    /// Take the captured records, leaving the printer empty
    pub fn drain(&self) -> Vec<PrintedRecord> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl Printer for MemoryPrinter {
    fn print(&self, namespace: &str, level: LogLevel, msg: &str, options: &Options<'_>) {
        let record = PrintedRecord {
            namespace: namespace.to_string(),
            level,
            message: options.message(msg).into_owned(),
            request_id: options
                .context
                .as_ref()
                .and_then(|ctx| ctx.request_id())
                .map(str::to_string),
            error: options.error().map(|err| err.to_string()),
            metadata: options.metadata.clone(),
        };

        self.records.lock().push(record);
    }
}
