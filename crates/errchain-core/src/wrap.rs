//! Re-raising one error as another kind.
//!
//! Wrapping never touches the wrapper: `a.wrap(b)` builds a fresh value of
//! `a`'s kind with `a`'s message, code and annotations and `b` as cause.
//! Kinds opt in by implementing [`Reconstruct`], so a kind that cannot
//! rebuild itself cannot be used as a wrapper.

use crate::{Exception, Thrown};

pub trait Reconstruct: Exception + Sized {
    /// Build a value of this kind from its fixed parts.
    fn reconstruct(message: String, code: i64, cause: Option<Thrown>) -> Self;

    /// Copy of `self` with a new cause. Kinds carrying extra state (such as
    /// exception groups) override this to keep it.
    fn rebuild(&self, cause: Thrown) -> Self {
        Self::reconstruct(self.message().to_owned(), self.code(), Some(cause))
    }

    /// New node of this kind wrapping `inner`. `self` is left untouched.
    fn wrap(&self, inner: impl Into<Thrown>) -> Self {
        let mut wrapped = self.rebuild(inner.into());
        wrapped.node_mut().inherit_annotations(self.node());
        wrapped
    }
}
