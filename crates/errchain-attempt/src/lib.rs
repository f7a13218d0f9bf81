//! # errchain-attempt
//!
//! Running computations and deciding what to do with their failures.
//!
//! - [`Attempt`] runs a computation once and captures its value or error
//! - [`Computation`] and [`Registry`] normalize what can be run
//! - [`Deferred`] holds cleanup actions for when a block fails

pub mod attempt;
pub mod computation;
pub mod deferred;

pub use attempt::Attempt;
pub use computation::{Computation, Handle, Invoke, Registry, Thunk};
pub use deferred::Deferred;
