//! Per-call options and composable setters
//!
//! Every logging call builds a fresh [`Options`] value by applying a list of
//! [`Setter`]s, in order, to an empty one. Scalars (level, namespace, context)
//! follow last-writer-wins; maps (metadata, values) merge per key.
//!
//! ```
//! use logk::core::options::{self, Options};
//! use logk::LogLevel;
//!
//! let opts = Options::evaluate(&[
//!     options::level(LogLevel::Debug),
//!     options::with_namespace("api"),
//!     options::level(LogLevel::Warn),
//! ]);
//! assert_eq!(opts.level, Some(LogLevel::Warn));
//! assert_eq!(opts.namespace.as_deref(), Some("api"));
//! ```

use super::context::Context;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Key under which [`error`] stores the carried error
pub const ERROR_KEY: &str = "error";

pub type SharedError = Arc<dyn std::error::Error + Send + Sync>;

/// Free-form structured attachments, rendered by printers as a JSON object
pub type Metadata = HashMap<String, Value>;

/// Typed extra stored in [`Options::values`]
///
/// Getters match the variant exactly; there is no conversion between variants.
#[derive(Debug, Clone)]
pub enum OptionValue {
    String(String),
    Int64(i64),
    Time(DateTime<Utc>),
    Error(SharedError),
    Map(Metadata),
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::String(s)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::String(s.to_string())
    }
}

impl From<i64> for OptionValue {
    fn from(i: i64) -> Self {
        OptionValue::Int64(i)
    }
}

impl From<DateTime<Utc>> for OptionValue {
    fn from(t: DateTime<Utc>) -> Self {
        OptionValue::Time(t)
    }
}

impl From<SharedError> for OptionValue {
    fn from(e: SharedError) -> Self {
        OptionValue::Error(e)
    }
}

impl From<Metadata> for OptionValue {
    fn from(m: Metadata) -> Self {
        OptionValue::Map(m)
    }
}

/// Options evaluated for a single logging call
#[derive(Debug, Clone, Default)]
pub struct Options<'a> {
    /// Level override
    pub level: Option<LogLevel>,
    /// Namespace override
    pub namespace: Option<String>,
    /// Ambient request context
    pub context: Option<Context>,
    /// Structured attachments
    pub metadata: Metadata,
    /// Formatting arguments, set only by the `*f` logging variants
    pub fmt_args: Option<fmt::Arguments<'a>>,
    /// Typed extras such as the carried error
    pub values: HashMap<String, OptionValue>,
}

impl Options<'static> {
    /// Apply `setters` in order to an empty `Options`
    pub fn evaluate(setters: &[Setter]) -> Self {
        let mut options = Options::default();
        for setter in setters {
            setter.apply(&mut options);
        }
        options
    }
}

impl<'a> Options<'a> {
    /// Options carrying only formatting arguments
    pub fn with_format(args: fmt::Arguments<'a>) -> Self {
        Self {
            fmt_args: Some(args),
            ..Default::default()
        }
    }

    /// Final message text: the formatted arguments when present, else `msg`
    pub fn message<'m>(&self, msg: &'m str) -> Cow<'m, str> {
        match self.fmt_args {
            Some(args) => Cow::Owned(fmt::format(args)),
            None => Cow::Borrowed(msg),
        }
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(OptionValue::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn get_int64(&self, key: &str) -> Option<i64> {
        match self.values.get(key) {
            Some(OptionValue::Int64(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn get_time(&self, key: &str) -> Option<DateTime<Utc>> {
        match self.values.get(key) {
            Some(OptionValue::Time(t)) => Some(*t),
            _ => None,
        }
    }

    pub fn get_error(&self, key: &str) -> Option<SharedError> {
        match self.values.get(key) {
            Some(OptionValue::Error(e)) => Some(Arc::clone(e)),
            _ => None,
        }
    }

    /// Error stored by the [`error`] setter
    pub fn error(&self) -> Option<SharedError> {
        self.get_error(ERROR_KEY)
    }
}

/// Exact-type lookup of a string value
pub fn get_string<'o>(options: &'o Options<'_>, key: &str) -> Option<&'o str> {
    options.get_string(key)
}

/// Exact-type lookup of an `i64` value
pub fn get_int64(options: &Options<'_>, key: &str) -> Option<i64> {
    options.get_int64(key)
}

/// Exact-type lookup of a timestamp value
pub fn get_time(options: &Options<'_>, key: &str) -> Option<DateTime<Utc>> {
    options.get_time(key)
}

/// Exact-type lookup of an error value
pub fn get_error(options: &Options<'_>, key: &str) -> Option<SharedError> {
    options.get_error(key)
}

/// A unit of configuration applied to [`Options`]
///
/// Setters are cheap to clone and may be shared across threads, so a list of
/// them can be reused for many calls or extended when deriving child loggers.
#[derive(Clone)]
pub struct Setter(Arc<dyn Fn(&mut Options<'_>) + Send + Sync>);

impl Setter {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Options<'_>) + Send + Sync + 'static,
    {
        Setter(Arc::new(f))
    }

    #[inline]
    pub fn apply(&self, options: &mut Options<'_>) {
        (self.0)(options)
    }
}

impl fmt::Debug for Setter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Setter(..)")
    }
}

/// Override the level
pub fn level(level: LogLevel) -> Setter {
    Setter::new(move |o| o.level = Some(level))
}

/// Override the namespace
pub fn with_namespace(namespace: impl Into<String>) -> Setter {
    let namespace = namespace.into();
    Setter::new(move |o| o.namespace = Some(namespace.clone()))
}

/// Attach an ambient context
pub fn with_context(ctx: Context) -> Setter {
    Setter::new(move |o| o.context = Some(ctx.clone()))
}

/// Merge `metadata` into the record's metadata, overwriting existing keys
pub fn with_metadata(metadata: Metadata) -> Setter {
    Setter::new(move |o| {
        for (key, value) in &metadata {
            o.metadata.insert(key.clone(), value.clone());
        }
    })
}

/// Add a single metadata entry
pub fn with_field(key: impl Into<String>, value: impl Into<Value>) -> Setter {
    let key = key.into();
    let value = value.into();
    Setter::new(move |o| {
        o.metadata.insert(key.clone(), value.clone());
    })
}

/// Carry an error, stored under [`ERROR_KEY`]
pub fn error<E>(err: E) -> Setter
where
    E: std::error::Error + Send + Sync + 'static,
{
    shared_error(Arc::new(err))
}

/// Carry an already shared error, stored under [`ERROR_KEY`]
pub fn shared_error(err: SharedError) -> Setter {
    with_value(ERROR_KEY, err)
}

/// Store a typed extra under `key`
pub fn with_value(key: impl Into<String>, value: impl Into<OptionValue>) -> Setter {
    let key = key.into();
    let value = value.into();
    Setter::new(move |o| {
        o.values.insert(key.clone(), value.clone());
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[derive(Debug, thiserror::Error)]
    #[error("connection refused")]
    struct ConnError;

    #[test]
    fn test_evaluate_empty() {
        let opts = Options::evaluate(&[]);
        assert!(opts.level.is_none());
        assert!(opts.namespace.is_none());
        assert!(opts.context.is_none());
        assert!(opts.metadata.is_empty());
        assert!(opts.fmt_args.is_none());
        assert!(opts.values.is_empty());
    }

    #[test]
    fn test_later_scalar_wins() {
        let opts = Options::evaluate(&[
            with_namespace("first"),
            level(LogLevel::Trace),
            with_namespace("second"),
        ]);
        assert_eq!(opts.namespace.as_deref(), Some("second"));
        assert_eq!(opts.level, Some(LogLevel::Trace));
    }

    #[test]
    fn test_metadata_merges_per_key() {
        let mut first = Metadata::new();
        first.insert("user".into(), json!("alice"));
        first.insert("attempt".into(), json!(1));
        let mut second = Metadata::new();
        second.insert("attempt".into(), json!(2));

        let opts = Options::evaluate(&[
            with_metadata(first),
            with_metadata(second),
            with_field("ok", false),
        ]);

        assert_eq!(opts.metadata.len(), 3);
        assert_eq!(opts.metadata["user"], json!("alice"));
        assert_eq!(opts.metadata["attempt"], json!(2));
        assert_eq!(opts.metadata["ok"], json!(false));
    }

    #[test]
    fn test_getters_require_exact_type() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
        let opts = Options::evaluate(&[
            with_value("count", 42i64),
            with_value("name", "worker"),
            with_value("at", ts),
        ]);

        assert_eq!(opts.get_int64("count"), Some(42));
        assert_eq!(get_string(&opts, "count"), None);
        assert_eq!(get_string(&opts, "name"), Some("worker"));
        assert_eq!(get_int64(&opts, "name"), None);
        assert_eq!(get_time(&opts, "at"), Some(ts));
        assert!(get_error(&opts, "name").is_none());
        assert_eq!(opts.get_string("missing"), None);
    }

    #[test]
    fn test_map_value_is_not_metadata() {
        let mut headers = Metadata::new();
        headers.insert("accept".into(), json!("text/plain"));
        let opts = Options::evaluate(&[with_value("headers", headers.clone())]);

        assert!(opts.metadata.is_empty());
        match opts.values.get("headers") {
            Some(OptionValue::Map(map)) => assert_eq!(map, &headers),
            other => panic!("expected a map value, got {:?}", other),
        }
        assert_eq!(opts.get_string("headers"), None);
        assert!(opts.get_error("headers").is_none());
    }

    #[test]
    fn test_error_setter() {
        let opts = Options::evaluate(&[error(ConnError)]);
        let err = opts.error().expect("error stored");
        assert_eq!(err.to_string(), "connection refused");
        assert!(opts.get_string(ERROR_KEY).is_none());
    }

    #[test]
    fn test_format_options_render_lazily() {
        let code = 503;
        assert_eq!(
            Options::with_format(format_args!("status {}", code)).message("ignored"),
            "status 503"
        );

        let opts = Options::with_format(format_args!("no arguments"));
        assert!(opts.level.is_none());
        assert_eq!(opts.message(""), "no arguments");

        let plain = Options::evaluate(&[]);
        assert!(matches!(plain.message("literal"), Cow::Borrowed("literal")));
    }

    #[test]
    fn test_setters_are_reusable() {
        let setters = vec![with_field("k", "v"), with_namespace("ns")];
        let a = Options::evaluate(&setters);
        let b = Options::evaluate(&setters);
        assert_eq!(a.metadata, b.metadata);
        assert_eq!(a.namespace, b.namespace);
    }
}
