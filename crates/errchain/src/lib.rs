//! # errchain
//!
//! Chained, annotated errors with groups, attempts and deferred cleanup.
//!
//! This crate re-exports [`errchain_core`] and [`errchain_attempt`] so one
//! dependency covers the whole toolkit.
//!
//! ```rust
//! use errchain::{Attempt, ChainExt, Exception, HttpStatus, Reconstruct};
//!
//! errchain::exception!(pub struct DriverError);
//! errchain::exception!(pub struct RepositoryError { code: 500 });
//!
//! let attempt = Attempt::run(|| {
//!     Err::<u32, _>(RepositoryError::new("could not load user").wrap(DriverError::new("reset")))
//! });
//!
//! let err = attempt.abort(HttpStatus::ServiceUnavailable, None).unwrap_err();
//! assert_eq!(err.code(), 503);
//! assert_eq!(err.chain_depth(), 3);
//! assert_eq!(err.root_cause().message(), "reset");
//! ```

pub use errchain_attempt::*;
pub use errchain_core::*;
