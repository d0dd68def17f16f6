//! Logger capability and the standard implementation

use super::{
    context::Context,
    log_level::LogLevel,
    options::{self, Options, Setter},
    printer::Printer,
    registry::{ENV_LOG_LEVEL, ENV_LOG_NAMESPACE},
};
use crate::printers::StdPrinter;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a logger, as stored in the global registry
pub type SharedLogger = Arc<dyn Logger>;

/// Leveled, namespaced logging capability.
///
/// Each level has a plain method taking a message plus [`Setter`]s, and a
/// formatted `*f` variant taking pre-bound [`fmt::Arguments`]; the
/// `fatal!`..`trace!` macros build those arguments. None of the methods
/// affect control flow: `fatal` only logs.
pub trait Logger: Send + Sync {
    fn fatal(&self, msg: &str, setters: &[Setter]);
    fn fatalf(&self, args: fmt::Arguments<'_>);

    fn error(&self, msg: &str, setters: &[Setter]);
    fn errorf(&self, args: fmt::Arguments<'_>);

    fn warn(&self, msg: &str, setters: &[Setter]);
    fn warnf(&self, args: fmt::Arguments<'_>);

    fn info(&self, msg: &str, setters: &[Setter]);
    fn infof(&self, args: fmt::Arguments<'_>);

    fn debug(&self, msg: &str, setters: &[Setter]);
    fn debugf(&self, args: fmt::Arguments<'_>);

    fn trace(&self, msg: &str, setters: &[Setter]);
    fn tracef(&self, args: fmt::Arguments<'_>);

    /// Derive a logger sharing this one's printer and threshold.
    ///
    /// Only the namespace and context can be overridden.
    fn new_child(&self, setters: &[Setter]) -> SharedLogger;
}

/// Standard logger: a threshold, a namespace, an optional ambient context
/// and a shared printer.
///
/// Immutable once built; "changing" a logger means deriving a child.
#[derive(Clone)]
pub struct StdLogger {
    level: LogLevel,
    namespace: String,
    printer: Arc<dyn Printer>,
    context: Option<Context>,
}

impl StdLogger {
    /// Build a logger from `setters`.
    ///
    /// Without a printer, records go to [`StdPrinter::stdout`]. Without a
    /// level setter the threshold is [`LogLevel::Info`].
    pub fn new(printer: Option<Arc<dyn Printer>>, setters: &[Setter]) -> Self {
        let options = Options::evaluate(setters);

        Self {
            level: options.level.unwrap_or_default(),
            namespace: options
                .namespace
                .filter(|namespace| !namespace.is_empty())
                .unwrap_or_default(),
            printer: printer.unwrap_or_else(|| Arc::new(StdPrinter::stdout())),
            context: options.context,
        }
    }

    /// Create a builder for StdLogger
    ///
    /// # Example
    /// ```
    /// use logk::prelude::*;
    ///
    /// let logger = StdLogger::builder()
    ///     .level(LogLevel::Debug)
    ///     .namespace("api")
    ///     .printer(MemoryPrinter::new())
    ///     .build();
    /// assert_eq!(logger.namespace(), "api");
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    pub fn printer(&self) -> &Arc<dyn Printer> {
        &self.printer
    }

    /// Concrete form of [`Logger::new_child`].
    ///
    /// The parent namespace is kept unless a non-empty one is given, the
    /// parent threshold is always kept, and a context is only set when passed
    /// explicitly.
    #[must_use]
    pub fn child(&self, setters: &[Setter]) -> StdLogger {
        let overrides = Options::evaluate(setters);
        let mut args = setters.to_vec();

        let has_namespace = overrides
            .namespace
            .as_deref()
            .is_some_and(|namespace| !namespace.is_empty());
        if !has_namespace && !self.namespace.is_empty() {
            args.push(options::with_namespace(self.namespace.clone()));
        }

        // Appended last so it wins over any level setter the caller passed
        args.push(options::level(self.level));

        StdLogger::new(Some(Arc::clone(&self.printer)), &args)
    }

    pub fn into_shared(self) -> SharedLogger {
        Arc::new(self)
    }

    fn print(&self, level: LogLevel, msg: &str, mut options: Options<'_>) {
        if !level.enabled_at(self.level) {
            return;
        }

        if options.context.is_none() {
            options.context = self.context.clone();
        }

        self.printer.print(&self.namespace, level, msg, &options);
    }

    fn print_formatted(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !level.enabled_at(self.level) {
            return;
        }

        // Rendered once; printers re-reading `fmt_args` only see the finished text
        let msg = match args.as_str() {
            Some(literal) => Cow::Borrowed(literal),
            None => Cow::Owned(fmt::format(args)),
        };
        self.print(level, &msg, Options::with_format(format_args!("{}", msg)));
    }
}

impl fmt::Debug for StdLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdLogger")
            .field("level", &self.level)
            .field("namespace", &self.namespace)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

impl Logger for StdLogger {
    #[inline]
    fn fatal(&self, msg: &str, setters: &[Setter]) {
        self.print(LogLevel::Fatal, msg, Options::evaluate(setters));
    }

    #[inline]
    fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.print_formatted(LogLevel::Fatal, args);
    }

    #[inline]
    fn error(&self, msg: &str, setters: &[Setter]) {
        self.print(LogLevel::Error, msg, Options::evaluate(setters));
    }

    #[inline]
    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.print_formatted(LogLevel::Error, args);
    }

    #[inline]
    fn warn(&self, msg: &str, setters: &[Setter]) {
        self.print(LogLevel::Warn, msg, Options::evaluate(setters));
    }

    #[inline]
    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.print_formatted(LogLevel::Warn, args);
    }

    #[inline]
    fn info(&self, msg: &str, setters: &[Setter]) {
        self.print(LogLevel::Info, msg, Options::evaluate(setters));
    }

    #[inline]
    fn infof(&self, args: fmt::Arguments<'_>) {
        self.print_formatted(LogLevel::Info, args);
    }

    #[inline]
    fn debug(&self, msg: &str, setters: &[Setter]) {
        self.print(LogLevel::Debug, msg, Options::evaluate(setters));
    }

    #[inline]
    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.print_formatted(LogLevel::Debug, args);
    }

    #[inline]
    fn trace(&self, msg: &str, setters: &[Setter]) {
        self.print(LogLevel::Trace, msg, Options::evaluate(setters));
    }

    #[inline]
    fn tracef(&self, args: fmt::Arguments<'_>) {
        self.print_formatted(LogLevel::Trace, args);
    }

    fn new_child(&self, setters: &[Setter]) -> SharedLogger {
        self.child(setters).into_shared()
    }
}

/// Builder for constructing StdLogger with a fluent API
///
/// Builder values are turned into setters and go through [`StdLogger::new`],
/// so a built logger follows the same defaults.
///
/// # Example
/// ```
/// use logk::prelude::*;
///
/// std::env::set_var("LOG_LEVEL", "trace");
/// let logger = LoggerBuilder::from_env().build();
/// assert_eq!(logger.level(), LogLevel::Trace);
/// # std::env::remove_var("LOG_LEVEL");
/// ```
#[derive(Default)]
pub struct LoggerBuilder {
    level: Option<LogLevel>,
    namespace: Option<String>,
    context: Option<Context>,
    printer: Option<Arc<dyn Printer>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed level and namespace from `LOG_LEVEL` and `LOG_NAMESPACE`.
    ///
    /// A missing or unknown level falls back to [`LogLevel::Info`]; a missing
    /// namespace leaves the logger without one.
    pub fn from_env() -> Self {
        let level = std::env::var(ENV_LOG_LEVEL).unwrap_or_default();
        let namespace = std::env::var(ENV_LOG_NAMESPACE).unwrap_or_default();

        Self::new()
            .level(LogLevel::parse(&level))
            .namespace(namespace)
    }

    /// Set the threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Set the namespace
    #[must_use = "builder methods return a new value"]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set the ambient context injected into records that carry none
    #[must_use = "builder methods return a new value"]
    pub fn context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }

    /// Set the printer
    #[must_use = "builder methods return a new value"]
    pub fn printer<P: Printer + 'static>(mut self, printer: P) -> Self {
        self.printer = Some(Arc::new(printer));
        self
    }

    /// Set a printer that is shared with other loggers
    #[must_use = "builder methods return a new value"]
    pub fn shared_printer(mut self, printer: Arc<dyn Printer>) -> Self {
        self.printer = Some(printer);
        self
    }

    /// Build the StdLogger
    pub fn build(self) -> StdLogger {
        let mut setters = Vec::new();
        if let Some(level) = self.level {
            setters.push(options::level(level));
        }
        if let Some(namespace) = self.namespace {
            setters.push(options::with_namespace(namespace));
        }
        if let Some(context) = self.context {
            setters.push(options::with_context(context));
        }

        StdLogger::new(self.printer, &setters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::with_request_id;
    use crate::printers::MemoryPrinter;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn logger_with(level: LogLevel) -> (StdLogger, Arc<MemoryPrinter>) {
        let printer = Arc::new(MemoryPrinter::new());
        let logger = StdLogger::builder()
            .level(level)
            .shared_printer(printer.clone())
            .build();
        (logger, printer)
    }

    #[test]
    fn test_default_threshold_is_info() {
        let printer: Arc<dyn Printer> = Arc::new(MemoryPrinter::new());
        let logger = StdLogger::new(Some(printer), &[]);
        assert_eq!(logger.level(), LogLevel::Info);
        assert_eq!(logger.namespace(), "");
        assert!(logger.context().is_none());
    }

    #[test]
    fn test_level_gate() {
        let (logger, printer) = logger_with(LogLevel::Info);

        logger.debug("hidden", &[]);
        logger.trace("hidden", &[]);
        assert!(printer.is_empty());

        logger.warn("shown", &[]);
        logger.info("shown", &[]);
        logger.fatal("shown", &[]);
        assert_eq!(printer.len(), 3);
    }

    #[test]
    fn test_gated_format_is_never_rendered() {
        struct Counted<'a>(&'a AtomicUsize);

        impl fmt::Display for Counted<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fetch_add(1, Ordering::SeqCst);
                f.write_str("counted")
            }
        }

        let renders = AtomicUsize::new(0);
        let (logger, printer) = logger_with(LogLevel::Warn);

        logger.debugf(format_args!("value {}", Counted(&renders)));
        assert_eq!(renders.load(Ordering::SeqCst), 0);

        logger.errorf(format_args!("value {}", Counted(&renders)));
        assert_eq!(renders.load(Ordering::SeqCst), 1);
        assert_eq!(printer.records()[0].message, "value counted");
    }

    #[test]
    fn test_logger_context_injected() {
        let ctx = with_request_id(&Context::background(), "req-1");
        let printer = Arc::new(MemoryPrinter::new());
        let logger = StdLogger::builder()
            .context(ctx)
            .shared_printer(printer.clone())
            .build();

        logger.info("implicit", &[]);
        let explicit = with_request_id(&Context::background(), "req-2");
        logger.info("explicit", &[options::with_context(explicit)]);

        let records = printer.records();
        assert_eq!(records[0].request_id.as_deref(), Some("req-1"));
        assert_eq!(records[1].request_id.as_deref(), Some("req-2"));
    }

    #[test]
    fn test_child_inherits_namespace_and_level() {
        let (parent, _) = logger_with(LogLevel::Debug);
        let parent = parent.child(&[options::with_namespace("api")]);
        assert_eq!(parent.namespace(), "api");
        assert_eq!(parent.level(), LogLevel::Debug);

        let child = parent.child(&[]);
        assert_eq!(child.namespace(), "api");
        assert_eq!(child.level(), LogLevel::Debug);

        let renamed = parent.child(&[options::with_namespace("users")]);
        assert_eq!(renamed.namespace(), "users");

        let grandchild = renamed.child(&[]);
        assert_eq!(grandchild.namespace(), "users");

        let blank = parent.child(&[options::with_namespace("")]);
        assert_eq!(blank.namespace(), "api");
    }

    #[test]
    fn test_child_level_cannot_be_overridden() {
        let (parent, _) = logger_with(LogLevel::Warn);
        let child = parent.child(&[options::level(LogLevel::Trace)]);
        assert_eq!(child.level(), LogLevel::Warn);
    }

    #[test]
    fn test_child_shares_printer_not_context() {
        let ctx = with_request_id(&Context::background(), "parent-req");
        let printer = Arc::new(MemoryPrinter::new());
        let parent = StdLogger::builder()
            .context(ctx)
            .shared_printer(printer.clone())
            .build();

        let child = parent.child(&[]);
        assert!(Arc::ptr_eq(parent.printer(), child.printer()));
        assert!(child.context().is_none());
        assert!(parent.context().is_some());

        let own = with_request_id(&Context::background(), "child-req");
        let child = parent.child(&[options::with_context(own)]);
        child.info("from child", &[]);
        assert_eq!(printer.records()[0].request_id.as_deref(), Some("child-req"));
    }

    #[test]
    fn test_fatal_does_not_terminate() {
        let (logger, printer) = logger_with(LogLevel::Fatal);
        logger.fatal("still running", &[]);
        logger.error("filtered", &[]);
        assert_eq!(printer.len(), 1);
    }
}
