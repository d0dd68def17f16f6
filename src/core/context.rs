//! Ambient request context carried from loggers to printers
//!
//! A [`Context`] is an immutable, cheap-to-clone bag of request-scoped string
//! values plus a cancellation signal. Deriving a context never mutates the
//! parent; derived contexts observe the cancellation of every ancestor.
//!
//! The only value the printers read is the request id:
//!
//! ```
//! use logk::core::context::{get_request_id, with_request_id, Context};
//!
//! let ctx = with_request_id(&Context::background(), "req-42");
//! assert_eq!(get_request_id(Some(&ctx)), "req-42");
//! assert_eq!(get_request_id(None), "");
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Key under which the request id is stored
pub const REQUEST_ID_KEY: &str = "request_id";

#[derive(Debug, Default)]
struct ContextInner {
    values: HashMap<String, String>,
    cancel_flags: Vec<Arc<AtomicBool>>,
}

/// Request-scoped context shared between a logger and the records it emits
#[derive(Debug, Clone, Default)]
pub struct Context {
    inner: Arc<ContextInner>,
}

/// Cancels the context returned alongside it by [`Context::with_cancel`]
#[derive(Debug, Clone)]
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }
}

impl Context {
    /// Empty root context, never cancelled
    pub fn background() -> Self {
        Self::default()
    }

    /// Derive a context carrying `key = value`
    #[must_use]
    pub fn with_value(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = self.inner.values.clone();
        values.insert(key.into(), value.into());
        Self {
            inner: Arc::new(ContextInner {
                values,
                cancel_flags: self.inner.cancel_flags.clone(),
            }),
        }
    }

    /// Derive a cancellable context
    ///
    /// Cancelling the handle cancels the derived context and its descendants,
    /// never the parent.
    #[must_use]
    pub fn with_cancel(&self) -> (Self, CancelHandle) {
        let flag = Arc::new(AtomicBool::new(false));
        let mut cancel_flags = self.inner.cancel_flags.clone();
        cancel_flags.push(Arc::clone(&flag));
        let ctx = Self {
            inner: Arc::new(ContextInner {
                values: self.inner.values.clone(),
                cancel_flags,
            }),
        };
        (ctx, CancelHandle { flag })
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.inner.values.get(key).map(String::as_str)
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner
            .cancel_flags
            .iter()
            .any(|flag| flag.load(Ordering::Acquire))
    }

    pub fn request_id(&self) -> Option<&str> {
        self.value(REQUEST_ID_KEY).filter(|id| !id.is_empty())
    }
}

/// Derive a context carrying `request_id`
pub fn with_request_id(ctx: &Context, request_id: impl Into<String>) -> Context {
    ctx.with_value(REQUEST_ID_KEY, request_id)
}

/// Request id stored in `ctx`, or an empty string
pub fn get_request_id(ctx: Option<&Context>) -> String {
    ctx.and_then(Context::request_id)
        .map(str::to_string)
        .unwrap_or_default()
}
