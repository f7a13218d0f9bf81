//! In-place field transformations.
//!
//! Every `map_*` runs a function over one field and stores the result back
//! into the same error. Results are not validated.

use crate::{Bag, Exception};

pub trait Transform: Exception + Sized {
    fn map_message<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&str) -> String,
    {
        let message = f(self.message());
        self.node_mut().set_message(message);
        self
    }

    fn map_context<F>(mut self, f: F) -> Self
    where
        F: FnOnce(Bag) -> Bag,
    {
        let context = std::mem::take(self.node_mut().context_mut());
        *self.node_mut().context_mut() = f(context);
        self
    }

    fn map_metadata<F>(mut self, f: F) -> Self
    where
        F: FnOnce(Bag) -> Bag,
    {
        let metadata = std::mem::take(self.node_mut().metadata_mut());
        *self.node_mut().metadata_mut() = f(metadata);
        self
    }

    fn map_tags<F>(mut self, f: F) -> Self
    where
        F: FnOnce(Vec<String>) -> Vec<String>,
    {
        let tags = std::mem::take(self.node_mut().tags_mut());
        *self.node_mut().tags_mut() = f(tags);
        self
    }

    fn map_notes<F>(mut self, f: F) -> Self
    where
        F: FnOnce(Vec<String>) -> Vec<String>,
    {
        let notes = std::mem::take(self.node_mut().notes_mut());
        *self.node_mut().notes_mut() = f(notes);
        self
    }

    /// Arbitrary multi-field edit in one step.
    fn transform<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        f(&mut self);
        self
    }
}

impl<T: Exception> Transform for T {}
