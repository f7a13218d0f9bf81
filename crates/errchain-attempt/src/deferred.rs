//! Cleanup actions that run when a block fails.

use std::fmt;

use errchain_core::{Result, Thrown};

/// Stack of cleanup actions.
///
/// Actions run in reverse registration order, at most once: either through
/// an explicit [`cleanup`](Deferred::cleanup), when a block driven by
/// [`run`](Deferred::run) fails, or as a last resort on drop.
///
/// ```rust
/// use std::cell::RefCell;
///
/// use errchain_attempt::Deferred;
/// use errchain_core::{Failure, Thrown};
///
/// let log = RefCell::new(Vec::new());
/// let mut deferred = Deferred::new();
///
/// let result: Result<(), Thrown> = deferred.run(|d| {
///     d.defer(|| log.borrow_mut().push("close file"));
///     d.defer(|| log.borrow_mut().push("release lock"));
///     Err(Failure::new("disk full"))
/// });
///
/// assert!(result.is_err());
/// assert_eq!(*log.borrow(), ["release lock", "close file"]);
/// ```
#[derive(Default)]
pub struct Deferred<'a> {
    actions: Vec<Box<dyn FnOnce() + 'a>>,
    cleaned: bool,
}

impl<'a> Deferred<'a> {
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
            cleaned: false,
        }
    }

    /// Register `action`. After cleanup has run, new actions are dropped.
    pub fn defer<F>(&mut self, action: F) -> &mut Self
    where
        F: FnOnce() + 'a,
    {
        if self.cleaned {
            tracing::warn!("cleanup already ran, dropping deferred action");
        } else {
            self.actions.push(Box::new(action));
        }
        self
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn is_cleaned(&self) -> bool {
        self.cleaned
    }

    /// Run every registered action, most recent first. Later calls do
    /// nothing.
    pub fn cleanup(&mut self) {
        if self.cleaned {
            return;
        }
        self.cleaned = true;

        tracing::trace!(count = self.actions.len(), "running deferred cleanup");
        while let Some(action) = self.actions.pop() {
            action();
        }
    }

    /// Run `block`; on failure run the cleanup and pass the error on
    /// unchanged. On success the actions stay registered.
    pub fn run<T, E, F>(&mut self, block: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> std::result::Result<T, E>,
        E: Into<Thrown>,
    {
        match block(self) {
            Ok(value) => Ok(value),
            Err(error) => {
                let error = error.into();
                tracing::debug!(
                    kind = error.kind_name(),
                    "block failed, running {} deferred action(s)",
                    self.actions.len()
                );
                self.cleanup();
                Err(error)
            }
        }
    }
}

impl Drop for Deferred<'_> {
    fn drop(&mut self) {
        if !self.cleaned && !self.actions.is_empty() {
            tracing::trace!(count = self.actions.len(), "deferred dropped with pending actions");
            self.cleanup();
        }
    }
}

impl fmt::Debug for Deferred<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("pending", &self.actions.len())
            .field("cleaned", &self.cleaned)
            .finish()
    }
}
