//! Several independent errors raised as one.

use std::fmt;

use crate::{AsException, ErrorNode, Exception, Reconstruct, Thrown, settings};

/// An ordered set of sibling errors plus the group's own message and
/// annotations. The members are not causally linked to each other.
#[derive(Clone)]
pub struct ExceptionGroup {
    node: ErrorNode,
    exceptions: Vec<Thrown>,
}

impl ExceptionGroup {
    /// Empty group with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            node: ErrorNode::new(message),
            exceptions: Vec::new(),
        }
    }

    /// Group holding `exceptions`. Without a message the configured default
    /// ("Multiple exceptions occurred") is used.
    pub fn from<I>(exceptions: I, message: Option<&str>) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Thrown>,
    {
        let message = message.map_or_else(settings::group_message, str::to_owned);
        Self {
            node: ErrorNode::new(message),
            exceptions: exceptions.into_iter().map(Into::into).collect(),
        }
    }

    /// Raise a group only if there is something to raise.
    ///
    /// ```rust
    /// use errchain_core::{ExceptionGroup, Thrown};
    ///
    /// let nothing: Vec<Thrown> = Vec::new();
    /// assert!(ExceptionGroup::raise(nothing, Some("validation failed")).is_ok());
    /// ```
    pub fn raise<I>(exceptions: I, message: Option<&str>) -> Result<(), ExceptionGroup>
    where
        I: IntoIterator,
        I::Item: Into<Thrown>,
    {
        let group = Self::from(exceptions, message);
        if group.is_empty() {
            return Ok(());
        }
        tracing::debug!(count = group.count(), "raising exception group: {}", group.message());
        Err(group)
    }

    pub fn push(&mut self, exception: impl Into<Thrown>) {
        self.exceptions.push(exception.into());
    }

    pub fn with_exception(mut self, exception: impl Into<Thrown>) -> Self {
        self.push(exception);
        self
    }

    pub fn exceptions(&self) -> &[Thrown] {
        &self.exceptions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Thrown> {
        self.exceptions.iter()
    }

    /// Members of kind `K`, in order.
    pub fn filter<K: Exception>(&self) -> Vec<&K> {
        self.exceptions
            .iter()
            .filter_map(|e| e.downcast_ref::<K>())
            .collect()
    }

    pub fn has<K: Exception>(&self) -> bool {
        self.exceptions.iter().any(|e| e.is::<K>())
    }

    pub fn count(&self) -> usize {
        self.exceptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exceptions.is_empty()
    }

    /// The group message followed by one `[n] Kind: message` line per
    /// member, numbered from 1.
    pub fn format(&self) -> String {
        Listing(self).to_string()
    }
}

struct Listing<'a>(&'a ExceptionGroup);

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.node.message())?;
        for (index, exception) in self.0.exceptions.iter().enumerate() {
            write!(
                f,
                "\n[{}] {}: {}",
                index + 1,
                exception.kind_name(),
                exception.message()
            )?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ExceptionGroup {
    type Item = &'a Thrown;
    type IntoIter = std::slice::Iter<'a, Thrown>;

    fn into_iter(self) -> Self::IntoIter {
        self.exceptions.iter()
    }
}

impl Exception for ExceptionGroup {
    fn node(&self) -> &ErrorNode {
        &self.node
    }

    fn node_mut(&mut self) -> &mut ErrorNode {
        &mut self.node
    }

    fn kind_name(&self) -> &'static str {
        "ExceptionGroup"
    }
}

impl Reconstruct for ExceptionGroup {
    fn reconstruct(message: String, code: i64, cause: Option<Thrown>) -> Self {
        Self {
            node: ErrorNode::with_parts(message, code, cause),
            exceptions: Vec::new(),
        }
    }

    fn rebuild(&self, cause: Thrown) -> Self {
        Self {
            node: ErrorNode::with_parts(self.message(), self.code(), Some(cause)),
            exceptions: self.exceptions.clone(),
        }
    }
}

impl fmt::Display for ExceptionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.node.message())
    }
}

impl fmt::Debug for ExceptionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExceptionGroup: {:?}", self.node)?;
        for (index, exception) in self.exceptions.iter().enumerate() {
            write!(f, "\n    [{}] {:?}", index + 1, exception)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExceptionGroup {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.node.cause().map(|cause| {
            let source: &(dyn std::error::Error + 'static) = AsException::as_error(&**cause);
            source
        })
    }
}

/// Accumulates failures and raises them once as a group.
///
/// Useful for validation passes that should report every problem instead
/// of stopping at the first one.
#[derive(Debug, Default)]
pub struct Collector {
    errors: Vec<Thrown>,
}

impl Collector {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn push(&mut self, error: impl Into<Thrown>) {
        self.errors.push(error.into());
    }

    /// Keep the value of an `Ok`, record the error of an `Err`.
    pub fn check<T, E>(&mut self, result: Result<T, E>) -> Option<T>
    where
        E: Into<Thrown>,
    {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.push(error);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// `Ok(())` when nothing was recorded, otherwise the group.
    pub fn finish(self, message: Option<&str>) -> Result<(), ExceptionGroup> {
        ExceptionGroup::raise(self.errors, message)
    }
}
