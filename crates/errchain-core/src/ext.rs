//! Extension trait for re-raising on the `Err` path of a `Result`.

use crate::{Reconstruct, Result, Thrown};

/// Wrap errors as they travel up, keeping the original as cause.
///
/// ```rust
/// use errchain_core::{ChainExt, ResultExt};
///
/// errchain_core::exception!(pub struct ConfigUnreadable);
///
/// let result = std::fs::read_to_string("/no/such/file.toml")
///     .wrap_err(ConfigUnreadable::new("could not read configuration"));
/// let err = result.unwrap_err();
/// assert_eq!(err.chain_depth(), 2);
/// ```
pub trait ResultExt<T> {
    /// Wrap the error in `wrapper` (see [`Reconstruct::wrap`]).
    fn wrap_err<K: Reconstruct>(self, wrapper: K) -> Result<T>;

    /// Like [`wrap_err`](Self::wrap_err), building the wrapper only on error.
    fn wrap_err_with<K, F>(self, wrapper: F) -> Result<T>
    where
        K: Reconstruct,
        F: FnOnce() -> K;

    /// Re-raise as kind `K` carrying `message`, with the error as cause.
    fn or_kind<K: Reconstruct>(self, message: impl Into<String>) -> Result<T>;

    /// Convert the error into a [`Thrown`].
    fn raised(self) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Thrown>,
{
    fn wrap_err<K: Reconstruct>(self, wrapper: K) -> Result<T> {
        self.map_err(|err| wrapper.wrap(err).into())
    }

    fn wrap_err_with<K, F>(self, wrapper: F) -> Result<T>
    where
        K: Reconstruct,
        F: FnOnce() -> K,
    {
        self.map_err(|err| wrapper().wrap(err).into())
    }

    fn or_kind<K: Reconstruct>(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|err| K::reconstruct(message.into(), 0, Some(err.into())).into())
    }

    fn raised(self) -> Result<T> {
        self.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChainExt, Exception};

    crate::exception!(struct ParseFailed);
    crate::exception!(struct ImportFailed { code: 3 });

    fn parse(input: &str) -> std::result::Result<u32, ParseFailed> {
        input
            .parse()
            .map_err(|_| ParseFailed::new(format!("not a number: {input}")))
    }

    #[test]
    fn test_wrap_err() {
        let err = parse("x")
            .wrap_err(ImportFailed::new("import aborted"))
            .unwrap_err();
        assert!(err.is::<ImportFailed>());
        assert_eq!(err.code(), 3);
        assert_eq!(err.root_cause().message(), "not a number: x");
    }

    #[test]
    fn test_wrap_err_with_is_lazy_on_ok() {
        let value = parse("12")
            .wrap_err_with(|| -> ImportFailed { panic!("wrapper built on success") })
            .unwrap();
        assert_eq!(value, 12);
    }

    #[test]
    fn test_or_kind() {
        let err = parse("x").or_kind::<ImportFailed>("bad row").unwrap_err();
        assert_eq!(err.message(), "bad row");
        assert_eq!(err.code(), 0);
        assert!(err.has_in_chain::<ParseFailed>());
    }

    #[test]
    fn test_raised() {
        let err = parse("x").raised().unwrap_err();
        assert!(err.is::<ParseFailed>());
        assert_eq!(err.chain_depth(), 1);
    }
}
