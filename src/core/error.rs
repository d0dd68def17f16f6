//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {source}")]
    IoOperation {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Level name that does not match any known level
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Attempt to register an empty logger in the global registry
    #[error("logk: logger to be registered is nil")]
    NilLogger,
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(operation: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            source,
        }
    }

    /// Create an invalid level error
    pub fn invalid_level(name: impl Into<String>) -> Self {
        LoggerError::InvalidLevel(name.into())
    }
}
