//! The state every error kind carries.

use std::fmt;

use serde_json::{Map, Value};

use crate::Thrown;

/// Insertion-ordered string keyed bag used for context and metadata.
pub type Bag = Map<String, Value>;

/// One failure event: message, code, an optional cause and the
/// annotations attached to it along the way.
///
/// Every error kind embeds exactly one `ErrorNode` and exposes it through
/// [`Exception::node`](crate::Exception::node). The cause can only be set
/// when the node is built, which keeps every chain finite.
#[derive(Clone, Default)]
pub struct ErrorNode {
    message: String,
    code: i64,
    cause: Option<Thrown>,
    context: Bag,
    tags: Vec<String>,
    metadata: Bag,
    notes: Vec<String>,
}

impl ErrorNode {
    /// Create a node with the given message, code `0` and no cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_parts(message, 0, None)
    }

    /// Create a node from its fixed parts.
    pub fn with_parts(message: impl Into<String>, code: i64, cause: Option<Thrown>) -> Self {
        Self {
            message: message.into(),
            code,
            cause,
            context: Bag::new(),
            tags: Vec::new(),
            metadata: Bag::new(),
            notes: Vec::new(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> i64 {
        self.code
    }

    /// The wrapped error, if any.
    pub fn cause(&self) -> Option<&Thrown> {
        self.cause.as_ref()
    }

    pub fn context(&self) -> &Bag {
        &self.context
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn metadata(&self) -> &Bag {
        &self.metadata
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn set_code(&mut self, code: i64) {
        self.code = code;
    }

    /// Right-biased merge: incoming keys overwrite existing ones, new keys
    /// are appended in iteration order.
    pub fn merge_context<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        merge_into(&mut self.context, entries);
    }

    /// Same merge rule as [`merge_context`](Self::merge_context).
    pub fn merge_metadata<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        merge_into(&mut self.metadata, entries);
    }

    /// Append tags. Duplicates are kept.
    pub fn push_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
    }

    pub fn push_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    pub fn context_mut(&mut self) -> &mut Bag {
        &mut self.context
    }

    pub fn metadata_mut(&mut self) -> &mut Bag {
        &mut self.metadata
    }

    pub fn tags_mut(&mut self) -> &mut Vec<String> {
        &mut self.tags
    }

    pub fn notes_mut(&mut self) -> &mut Vec<String> {
        &mut self.notes
    }

    pub(crate) fn take_cause(&mut self) -> Option<Thrown> {
        self.cause.take()
    }

    /// Copy context, tags, metadata and notes from `other`, replacing
    /// whatever this node held. Message, code and cause are left alone.
    pub fn inherit_annotations(&mut self, other: &ErrorNode) {
        self.context = other.context.clone();
        self.tags = other.tags.clone();
        self.metadata = other.metadata.clone();
        self.notes = other.notes.clone();
    }
}

// Unlinks uniquely owned causes one at a time so dropping a long chain does
// not recurse once per node.
impl Drop for ErrorNode {
    fn drop(&mut self) {
        let mut next = self.cause.take();
        while let Some(mut cause) = next {
            next = cause.detach_cause();
        }
    }
}

fn merge_into<I, K, V>(bag: &mut Bag, entries: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    for (key, value) in entries {
        bag.insert(key.into(), value.into());
    }
}

impl fmt::Debug for ErrorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if self.code != 0 {
            write!(f, " (code {})", self.code)?;
        }

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Context:")?;
            for (key, value) in &self.context {
                writeln!(f, "        {}: {}", key, value)?;
            }
        }

        if !self.tags.is_empty() {
            writeln!(f)?;
            write!(f, "    Tags: {}", self.tags.join(", "))?;
        }

        if let Some(cause) = &self.cause {
            writeln!(f)?;
            write!(f, "    Cause: {:?}", cause)?;
        }

        Ok(())
    }
}
