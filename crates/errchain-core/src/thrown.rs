//! The raised form of an error.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::Exception;

/// A raised error: a shared handle to any [`Exception`].
///
/// Returning `Err(Thrown)` is how this crate "throws". Cloning is cheap and
/// keeps identity, so a cause referenced from several wrappers is still the
/// same node (see [`Thrown::ptr_eq`]).
#[derive(Clone)]
pub struct Thrown(Arc<dyn Exception>);

impl Thrown {
    pub fn new<E: Exception>(error: E) -> Self {
        Self(Arc::new(error))
    }

    pub fn exception(&self) -> &dyn Exception {
        &*self.0
    }

    /// Whether both handles point at the same node.
    pub fn ptr_eq(&self, other: &Thrown) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }

    /// Take the cause out of the node when this is the only handle to it.
    pub(crate) fn detach_cause(&mut self) -> Option<Thrown> {
        Arc::get_mut(&mut self.0).and_then(|exception| exception.node_mut().take_cause())
    }

    /// Whether this handle points at `node`.
    pub fn is_node(&self, node: &dyn Exception) -> bool {
        crate::same_node(self.exception(), node)
    }
}

impl<E: Exception> From<E> for Thrown {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl Deref for Thrown {
    type Target = dyn Exception;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl AsRef<dyn Exception> for Thrown {
    fn as_ref(&self) -> &(dyn Exception + 'static) {
        &*self.0
    }
}

impl fmt::Display for Thrown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl fmt::Debug for Thrown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl std::error::Error for Thrown {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&*self.0)
    }
}
