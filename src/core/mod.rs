//! Core logger types and traits

pub mod context;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod options;
pub mod printer;
pub mod registry;
pub mod timestamp;

pub use context::{CancelHandle, Context};
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, SharedLogger, StdLogger};
pub use options::{Metadata, OptionValue, Options, Setter, SharedError, ERROR_KEY};
pub use printer::Printer;
pub use registry::{ENV_LOG_LEVEL, ENV_LOG_NAMESPACE};
pub use timestamp::TimestampFormat;
