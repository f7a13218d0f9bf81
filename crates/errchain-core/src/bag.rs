//! Fluent annotation builders.
//!
//! Each builder takes the error by value, merges into it and hands the same
//! error back, so annotations can be stacked before the error is raised:
//!
//! ```rust
//! use errchain_core::{Annotate, Exception};
//!
//! errchain_core::exception!(pub struct QuotaExceeded);
//!
//! let err = QuotaExceeded::new("too many uploads")
//!     .with_context([("user", 42)])
//!     .with_tag("billing");
//! assert!(err.has_tag("billing"));
//! ```
//!
//! Context and metadata merge right-biased (later keys win); tags append and
//! keep duplicates.

use serde_json::Value;

use crate::Exception;

pub trait Annotate: Exception + Sized {
    fn with_context<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.node_mut().merge_context(entries);
        self
    }

    fn with_context_entry(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with_context([(key.into(), value.into())])
    }

    fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.node_mut().push_tags(tags);
        self
    }

    fn with_tag(self, tag: impl Into<String>) -> Self {
        self.with_tags([tag.into()])
    }

    fn with_metadata<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.node_mut().merge_metadata(entries);
        self
    }

    fn with_note(mut self, note: impl Into<String>) -> Self {
        self.node_mut().push_note(note);
        self
    }

    fn with_code(mut self, code: i64) -> Self {
        self.node_mut().set_code(code);
        self
    }
}

impl<T: Exception> Annotate for T {}
