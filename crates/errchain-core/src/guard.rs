//! Conditional raising.
//!
//! ```rust
//! use errchain_core::{HttpStatus, Result, abort_unless, throw_if};
//!
//! errchain_core::exception!(pub struct NegativeAmount);
//!
//! fn charge(amount: i64, authorized: bool) -> Result<i64> {
//!     throw_if(amount < 0, || NegativeAmount::new("amount must be positive"))?;
//!     abort_unless(authorized, HttpStatus::Forbidden, None)?;
//!     Ok(amount)
//! }
//!
//! assert!(charge(-1, true).is_err());
//! assert_eq!(charge(5, true).unwrap(), 5);
//! ```

use crate::{Exception, HttpAbort, HttpStatus, Result, Thrown};

/// Raise the lazily built error when `condition` holds.
pub fn throw_if<E, F>(condition: bool, error: F) -> Result<()>
where
    E: Into<Thrown>,
    F: FnOnce() -> E,
{
    if condition { Err(error().into()) } else { Ok(()) }
}

pub fn throw_unless<E, F>(condition: bool, error: F) -> Result<()>
where
    E: Into<Thrown>,
    F: FnOnce() -> E,
{
    throw_if(!condition, error)
}

/// Ask the request layer to stop with `status` when `condition` holds.
pub fn abort_if(condition: bool, status: HttpStatus, message: Option<&str>) -> Result<()> {
    throw_if(condition, || HttpAbort::new(status, message))
}

pub fn abort_unless(condition: bool, status: HttpStatus, message: Option<&str>) -> Result<()> {
    abort_if(!condition, status, message)
}

/// Eager counterparts for an error value already in hand.
pub trait Raise: Exception + Sized {
    fn throw_if(self, condition: bool) -> Result<()> {
        if condition { Err(self.into()) } else { Ok(()) }
    }

    fn throw_unless(self, condition: bool) -> Result<()> {
        self.throw_if(!condition)
    }

    /// `Err(self)` as any result type.
    fn into_err<T>(self) -> Result<T> {
        Err(self.into())
    }
}

impl<T: Exception> Raise for T {}
