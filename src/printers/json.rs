//! JSON printer for structured logging

use crate::core::{LogLevel, LoggerError, Metadata, Options, Printer, Result, TimestampFormat};
use parking_lot::Mutex;
use serde::Serialize;
use std::borrow::Cow;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

#[derive(Serialize)]
struct JsonRecord<'r> {
    timestamp: String,
    level: LogLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<&'r str>,
    message: Cow<'r, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_id: Option<&'r str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'r Metadata>,
}

/// Writes each record as a single-line JSON object (JSONL format)
///
/// Compatible with log aggregation tools like ELK, Loki, etc. Empty fields
/// are omitted, and `error` follows the text printer's rule of only
/// appearing at `Error` and `Fatal`.
pub struct JsonPrinter {
    writer: Mutex<Box<dyn Write + Send>>,
    pretty: bool,
    timestamp_format: TimestampFormat,
}

impl JsonPrinter {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            pretty: false,
            timestamp_format: TimestampFormat::Iso8601,
        }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Append to the file at `path`, creating it if needed
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LoggerError::io_operation(format!("opening {}", path.display()), e))?;

        Ok(Self::new(file))
    }

    /// Pretty-print records over several lines
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Serialize one record, without trailing newline
    pub fn render(
        &self,
        namespace: &str,
        level: LogLevel,
        msg: &str,
        options: &Options<'_>,
    ) -> Result<String> {
        let record = JsonRecord {
            timestamp: self.timestamp_format.format_now(),
            level,
            namespace: Some(namespace).filter(|ns| !ns.is_empty()),
            message: options.message(msg),
            request_id: options.context.as_ref().and_then(|ctx| ctx.request_id()),
            error: options
                .error()
                .filter(|_| level <= LogLevel::Error)
                .map(|err| err.to_string()),
            metadata: Some(&options.metadata).filter(|m| !m.is_empty()),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&record)?
        } else {
            serde_json::to_string(&record)?
        };
        Ok(json)
    }

    fn emit(
        &self,
        namespace: &str,
        level: LogLevel,
        msg: &str,
        options: &Options<'_>,
    ) -> Result<()> {
        let json = self.render(namespace, level, msg, options)?;

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", json)?;
        writer.flush()?;
        Ok(())
    }
}

impl Printer for JsonPrinter {
    fn print(&self, namespace: &str, level: LogLevel, msg: &str, options: &Options<'_>) {
        let _ = self.emit(namespace, level, msg, options);
    }
}
