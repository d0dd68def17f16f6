//! Standard text printer

use crate::core::{LogLevel, LoggerError, Options, Printer, Result, TimestampFormat};
use parking_lot::Mutex;
use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

#[cfg(feature = "console")]
use colored::Colorize;

/// Writes records as human-readable lines.
///
/// ```text
/// [ERROR] > (api) request failed
///   > Request ID: req-42
///   > Error: connection refused
///   > Metadata: {"attempt":3}
/// ```
///
/// With a timestamp format, every line is stamped first, e.g.
/// `2025/01/08 10:30:45 [INFO]  > started`. Each record goes out in a single
/// write, so records from different threads never interleave.
pub struct StdPrinter {
    writer: Mutex<Box<dyn Write + Send>>,
    timestamp_format: Option<TimestampFormat>,
    #[cfg(feature = "console")]
    use_colors: bool,
}

impl StdPrinter {
    pub fn new<W: Write + Send + 'static>(
        writer: W,
        timestamp_format: Option<TimestampFormat>,
    ) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            timestamp_format,
            #[cfg(feature = "console")]
            use_colors: false,
        }
    }

    /// Stdout with standard timestamps
    pub fn stdout() -> Self {
        Self::new(io::stdout(), Some(TimestampFormat::Standard))
    }

    /// Append to the file at `path`, creating it if needed
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LoggerError::io_operation(format!("opening {}", path.display()), e))?;

        Ok(Self::new(file, Some(TimestampFormat::Standard)))
    }

    /// Set or remove the per-line timestamp
    #[must_use]
    pub fn with_timestamp_format(mut self, format: Option<TimestampFormat>) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Color the level tag
    #[cfg(feature = "console")]
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn level_tag(&self, level: LogLevel) -> String {
        #[cfg(feature = "console")]
        if self.use_colors {
            return level.prefix().color(level.color()).to_string();
        }

        level.prefix().to_string()
    }

    /// Render one record, newline-terminated
    pub fn render(
        &self,
        namespace: &str,
        level: LogLevel,
        msg: &str,
        options: &Options<'_>,
    ) -> String {
        let stamp = self
            .timestamp_format
            .as_ref()
            .map(|format| format!("{} ", format.format_now()))
            .unwrap_or_default();

        let mut out = String::new();
        out.push_str(&stamp);
        out.push_str(&self.level_tag(level));
        if !namespace.is_empty() {
            let _ = write!(out, "({}) ", namespace);
        }
        out.push_str(&options.message(msg));
        out.push('\n');

        if let Some(request_id) = options.context.as_ref().and_then(|ctx| ctx.request_id()) {
            let _ = writeln!(out, "{}  > Request ID: {}", stamp, request_id);
        }

        if level <= LogLevel::Error {
            if let Some(err) = options.error() {
                let _ = writeln!(out, "{}  > Error: {}", stamp, err);
            }
        }

        if !options.metadata.is_empty() {
            if let Ok(metadata) = serde_json::to_string(&options.metadata) {
                let _ = writeln!(out, "{}  > Metadata: {}", stamp, metadata);
            }
        }

        out
    }

    fn write_record(&self, record: &str) -> Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(record.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

impl Printer for StdPrinter {
    fn print(&self, namespace: &str, level: LogLevel, msg: &str, options: &Options<'_>) {
        let record = self.render(namespace, level, msg, options);
        let _ = self.write_record(&record);
    }
}
