//! # errchain-core
//!
//! Error nodes, cause chains and exception groups.
//!
//! ## Model
//!
//! - **Exception**: an error kind, any type owning an [`ErrorNode`]
//!   (message, code, cause, context, tags, metadata, notes)
//! - **Thrown**: the raised form, a shared handle returned as `Err(Thrown)`
//! - **Chain**: the node followed by its cause, the cause's cause, ...
//! - **ExceptionGroup**: independent errors raised as one unit
//!
//! ## Usage
//!
//! ```rust
//! use errchain_core::{Annotate, ChainExt, Exception, Reconstruct, Result};
//!
//! errchain_core::exception!(pub struct StorageDriverError);
//! errchain_core::exception!(pub struct UserRepositoryError { code: 500 });
//!
//! fn load_user(id: u64) -> Result<String> {
//!     let driver = StorageDriverError::new("connection reset");
//!     Err(UserRepositoryError::new("could not load user")
//!         .with_context([("user", id)])
//!         .wrap(driver)
//!         .into())
//! }
//!
//! let err = load_user(7).unwrap_err();
//! assert!(err.has_in_chain::<StorageDriverError>());
//! assert_eq!(err.root_cause().message(), "connection reset");
//! ```
//!
//! ## Principles
//!
//! - Builders (`with_*`, `map_*`, `transform`) move the error through and
//!   hand back the same value
//! - `wrap` never touches the wrapper; it builds a new node
//! - Chain queries never fail; absence is an empty result

mod bag;
mod chain;
mod exception;
mod ext;
mod group;
mod guard;
mod kinds;
mod node;
mod status;
mod thrown;
mod transform;
mod wrap;

pub mod report;
pub mod settings;

pub use bag::Annotate;
pub use chain::{Chain, ChainExt};
pub use exception::{AsException, Exception, same_node};
pub use ext::ResultExt;
pub use group::{Collector, ExceptionGroup};
pub use guard::{Raise, abort_if, abort_unless, throw_if, throw_unless};
pub use kinds::{Failure, HttpAbort, InvalidArgument};
pub use node::{Bag, ErrorNode};
pub use settings::Settings;
pub use status::HttpStatus;
pub use thrown::Thrown;
pub use transform::Transform;
pub use wrap::Reconstruct;

/// Result type alias using the raised error handle
pub type Result<T> = std::result::Result<T, Thrown>;
