//! Walking the cause chain.
//!
//! A chain is the node itself followed by its cause, the cause's cause and
//! so on. Every query here is a read-only walk in that order; "not found"
//! is an empty result, never an error.

use std::collections::HashSet;

use crate::{Exception, settings};

/// Iterator over a cause chain, starting with the node it was created from.
///
/// The walk stops at the first node without a cause or when a node is seen
/// twice. An explicit [`max_chain_depth`](crate::settings::max_chain_depth)
/// setting cuts it short after that many nodes.
pub struct Chain<'a> {
    next: Option<&'a dyn Exception>,
    seen: HashSet<usize>,
    remaining: usize,
}

impl<'a> Chain<'a> {
    pub fn new(start: &'a dyn Exception) -> Self {
        Self::with_limit(start, settings::max_chain_depth())
    }

    pub fn with_limit(start: &'a dyn Exception, limit: usize) -> Self {
        Self {
            next: Some(start),
            seen: HashSet::new(),
            remaining: limit.max(1),
        }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a dyn Exception;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;

        if self.remaining == 0 {
            tracing::warn!(
                kind = current.kind_name(),
                "cause chain exceeds the traversal limit, stopping"
            );
            return None;
        }

        let addr = (current as *const dyn Exception).cast::<()>() as usize;
        if !self.seen.insert(addr) {
            tracing::warn!(kind = current.kind_name(), "cause chain revisits a node, stopping");
            return None;
        }

        self.remaining -= 1;
        self.next = current.wrapped().map(|cause| cause.exception());
        Some(current)
    }
}

/// Chain queries, available on every [`Exception`] and on
/// [`Thrown`](crate::Thrown) through deref.
pub trait ChainExt: Exception {
    fn iter_chain(&self) -> Chain<'_> {
        Chain::new(self.as_exception())
    }

    /// `[self, cause, cause.cause, ...]`.
    fn chain(&self) -> Vec<&dyn Exception> {
        self.iter_chain().collect()
    }

    /// First node of kind `K`, starting with `self`.
    fn find_first<K: Exception>(&self) -> Option<&K> {
        self.iter_chain()
            .find_map(|node| node.as_any().downcast_ref::<K>())
    }

    /// Every node of kind `K`, in chain order.
    fn find_all<K: Exception>(&self) -> Vec<&K> {
        self.iter_chain()
            .filter_map(|node| node.as_any().downcast_ref::<K>())
            .collect()
    }

    fn filter_chain<P>(&self, mut predicate: P) -> Vec<&dyn Exception>
    where
        P: FnMut(&dyn Exception) -> bool,
    {
        self.iter_chain().filter(|node| predicate(*node)).collect()
    }

    fn has_in_chain<K: Exception>(&self) -> bool {
        self.find_first::<K>().is_some()
    }

    /// Last node of the chain; `self` when nothing is wrapped.
    fn root_cause(&self) -> &dyn Exception {
        self.iter_chain().last().unwrap_or(self.as_exception())
    }

    /// Number of nodes in the chain, at least one.
    fn chain_depth(&self) -> usize {
        self.iter_chain().count()
    }
}

impl<T: Exception + ?Sized> ChainExt for T {}
