//! Captured outcome of a fallible computation.

use std::fmt;

use errchain_core::{
    Exception, HttpAbort, HttpStatus, InvalidArgument, Reconstruct, Result, Thrown,
};

use crate::computation::{Computation, Registry};

#[derive(Clone)]
enum Outcome<T> {
    Succeeded(T),
    Failed(Thrown),
}

/// Either the value a computation produced or the error it raised.
///
/// The outcome is decided once, when the attempt is created, and never
/// changes. Terminal operations borrow the attempt and can be called any
/// number of times; the captured error is handed out as the same
/// [`Thrown`] every time.
///
/// ```rust
/// use errchain_attempt::Attempt;
/// use errchain_core::Exception;
///
/// errchain_core::exception!(pub struct UserMissing);
///
/// let attempt = Attempt::run(|| Err::<u32, _>(UserMissing::new("no user 7")));
/// assert_eq!(attempt.to_option(), None);
/// assert_eq!(attempt.get_or_else(0), 0);
///
/// let abort = attempt.or_not_found(None).unwrap_err();
/// assert_eq!(abort.code(), 404);
/// assert_eq!(abort.message(), "no user 7");
/// ```
#[derive(Clone)]
pub struct Attempt<T> {
    outcome: Outcome<T>,
}

impl<T> Attempt<T> {
    /// Run `computation` now and capture what it produces.
    pub fn run<F, E>(computation: F) -> Self
    where
        F: FnOnce() -> std::result::Result<T, E>,
        E: Into<Thrown>,
    {
        match computation() {
            Ok(value) => Self {
                outcome: Outcome::Succeeded(value),
            },
            Err(error) => Self::failed(error.into()),
        }
    }

    fn failed(error: Thrown) -> Self {
        tracing::debug!(
            kind = error.kind_name(),
            "computation failed: {}",
            error.message()
        );
        Self {
            outcome: Outcome::Failed(error),
        }
    }

    /// Build `I` with `Default` and run it through its
    /// [`Invoke`](crate::Invoke) entry point.
    pub fn of<I>() -> Self
    where
        I: crate::Invoke<Output = T> + Default,
    {
        Self::run(|| I::default().invoke())
    }

    /// Build `H` with `Default` and run it through its
    /// [`Handle`](crate::Handle) entry point.
    pub fn of_handler<H>() -> Self
    where
        H: crate::Handle<Output = T> + Default,
    {
        Self::run(|| H::default().handle())
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Succeeded(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, Outcome::Failed(_))
    }

    pub fn value(&self) -> Option<&T> {
        match &self.outcome {
            Outcome::Succeeded(value) => Some(value),
            Outcome::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&Thrown> {
        match &self.outcome {
            Outcome::Succeeded(_) => None,
            Outcome::Failed(error) => Some(error),
        }
    }

    pub fn into_result(self) -> Result<T> {
        match self.outcome {
            Outcome::Succeeded(value) => Ok(value),
            Outcome::Failed(error) => Err(error),
        }
    }

    /// Transform the value, keeping a failure as is.
    pub fn map<U, F>(self, f: F) -> Attempt<U>
    where
        F: FnOnce(T) -> U,
    {
        let outcome = match self.outcome {
            Outcome::Succeeded(value) => Outcome::Succeeded(f(value)),
            Outcome::Failed(error) => Outcome::Failed(error),
        };
        Attempt { outcome }
    }
}

impl<T: 'static> Attempt<T> {
    /// Resolve `computation` and run it.
    ///
    /// A named computation cannot be resolved here (there is no registry);
    /// use [`Attempt::with_registry`] for those.
    pub fn new(computation: Computation<T>) -> std::result::Result<Self, InvalidArgument> {
        Self::resolve_and_run(computation, None)
    }

    pub fn with_registry(
        computation: Computation<T>,
        registry: &Registry<T>,
    ) -> std::result::Result<Self, InvalidArgument> {
        Self::resolve_and_run(computation, Some(registry))
    }

    fn resolve_and_run(
        computation: Computation<T>,
        registry: Option<&Registry<T>>,
    ) -> std::result::Result<Self, InvalidArgument> {
        let shape = computation.shape();
        let thunk = computation.resolve(registry)?;
        tracing::trace!(shape, "running computation");
        Ok(Self::run(thunk))
    }
}

impl<T: Clone> Attempt<T> {
    /// The value, or the captured error raised again unchanged.
    pub fn get(&self) -> Result<T> {
        self.to_result()
    }

    pub fn to_option(&self) -> Option<T> {
        self.value().cloned()
    }

    pub fn to_result(&self) -> Result<T> {
        match &self.outcome {
            Outcome::Succeeded(value) => Ok(value.clone()),
            Outcome::Failed(error) => Err(error.clone()),
        }
    }

    pub fn get_or_else(&self, default: T) -> T {
        match &self.outcome {
            Outcome::Succeeded(value) => value.clone(),
            Outcome::Failed(_) => default,
        }
    }

    /// Like [`get_or_else`](Self::get_or_else) with a default of another
    /// type the value converts into.
    pub fn get_or_else_into<U>(&self, default: U) -> U
    where
        T: Into<U>,
    {
        match &self.outcome {
            Outcome::Succeeded(value) => value.clone().into(),
            Outcome::Failed(_) => default,
        }
    }

    /// The value, or whatever `handler` makes of the error. `handler` only
    /// runs on failure.
    pub fn recover<F>(&self, handler: F) -> T
    where
        F: FnOnce(&Thrown) -> T,
    {
        match &self.outcome {
            Outcome::Succeeded(value) => value.clone(),
            Outcome::Failed(error) => handler(error),
        }
    }

    /// On failure raise `error` wrapped around the captured error.
    pub fn or_throw<K: Reconstruct>(&self, error: K) -> Result<T> {
        match &self.outcome {
            Outcome::Succeeded(value) => Ok(value.clone()),
            Outcome::Failed(cause) => Err(error.wrap(cause.clone()).into()),
        }
    }

    /// On failure raise a new `K` with `message` (or the captured message)
    /// and the captured error as cause.
    pub fn or_throw_kind<K: Reconstruct>(&self, message: Option<&str>) -> Result<T> {
        match &self.outcome {
            Outcome::Succeeded(value) => Ok(value.clone()),
            Outcome::Failed(cause) => {
                let message = message.unwrap_or(cause.message()).to_owned();
                Err(K::reconstruct(message, 0, Some(cause.clone())).into())
            }
        }
    }

    /// On failure ask the request layer to answer with `status`. The
    /// message defaults to the captured message.
    pub fn abort(&self, status: HttpStatus, message: Option<&str>) -> Result<T> {
        match &self.outcome {
            Outcome::Succeeded(value) => Ok(value.clone()),
            Outcome::Failed(cause) => {
                let message = message.unwrap_or(cause.message());
                Err(HttpAbort::caused_by(status, Some(message), cause.clone()).into())
            }
        }
    }

    pub fn or_bad_request(&self, message: Option<&str>) -> Result<T> {
        self.abort(HttpStatus::BadRequest, message)
    }

    pub fn or_unauthorized(&self, message: Option<&str>) -> Result<T> {
        self.abort(HttpStatus::Unauthorized, message)
    }

    pub fn or_forbidden(&self, message: Option<&str>) -> Result<T> {
        self.abort(HttpStatus::Forbidden, message)
    }

    pub fn or_not_found(&self, message: Option<&str>) -> Result<T> {
        self.abort(HttpStatus::NotFound, message)
    }

    pub fn or_conflict(&self, message: Option<&str>) -> Result<T> {
        self.abort(HttpStatus::Conflict, message)
    }

    pub fn or_unprocessable(&self, message: Option<&str>) -> Result<T> {
        self.abort(HttpStatus::UnprocessableContent, message)
    }

    pub fn or_too_many_requests(&self, message: Option<&str>) -> Result<T> {
        self.abort(HttpStatus::TooManyRequests, message)
    }

    pub fn or_server_error(&self, message: Option<&str>) -> Result<T> {
        self.abort(HttpStatus::InternalServerError, message)
    }
}

impl<T> From<Attempt<T>> for Result<T> {
    fn from(attempt: Attempt<T>) -> Self {
        attempt.into_result()
    }
}

impl<T: fmt::Debug> fmt::Debug for Attempt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Succeeded(value) => f.debug_tuple("Succeeded").field(value).finish(),
            Outcome::Failed(error) => f.debug_tuple("Failed").field(error).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Computation, Handle, Invoke, Registry};
    use errchain_core::{ChainExt, Failure};
    use pretty_assertions::assert_eq;

    errchain_core::exception!(struct RateLimited { code: 429 });
    errchain_core::exception!(struct ServiceError);

    fn ok() -> Attempt<i32> {
        Attempt::run(|| Ok::<_, RateLimited>(7))
    }

    fn failed() -> Attempt<i32> {
        Attempt::run(|| Err::<i32, _>(RateLimited::new("slow down")))
    }

    #[test]
    fn test_exclusive_states() {
        for attempt in [ok(), failed()] {
            let some = attempt.to_option().is_some();
            let is_ok = attempt.to_result().is_ok();
            let got = attempt.get().is_ok();
            assert_eq!(some, is_ok);
            assert_eq!(is_ok, got);
            assert_eq!(attempt.is_success(), !attempt.is_failure());
        }
    }

    #[test]
    fn test_get_reraises_same_error() {
        let attempt = failed();
        let first = attempt.get().unwrap_err();
        let second = attempt.get().unwrap_err();
        assert!(first.ptr_eq(&second));
        assert!(first.ptr_eq(attempt.error().unwrap()));
    }

    #[test]
    fn test_get_or_else() {
        assert_eq!(ok().get_or_else(0), 7);
        assert_eq!(failed().get_or_else(0), 0);
        assert_eq!(ok().get_or_else_into(0i64), 7i64);
        assert_eq!(failed().get_or_else_into(-1i64), -1i64);
    }

    #[test]
    fn test_recover() {
        assert_eq!(failed().recover(|e| e.code() as i32), 429);

        let mut called = false;
        let value = ok().recover(|_| {
            called = true;
            0
        });
        assert_eq!(value, 7);
        assert!(!called);
    }

    #[test]
    fn test_or_throw_instance() {
        let err = failed()
            .or_throw(ServiceError::new("quote service unavailable"))
            .unwrap_err();
        assert!(err.is::<ServiceError>());
        assert_eq!(err.message(), "quote service unavailable");
        assert!(err.wrapped().unwrap().is::<RateLimited>());

        assert_eq!(ok().or_throw(ServiceError::new("unused")).unwrap(), 7);
    }

    #[test]
    fn test_or_throw_kind() {
        let err = failed().or_throw_kind::<ServiceError>(None).unwrap_err();
        assert_eq!(err.message(), "slow down");
        assert_eq!(err.chain_depth(), 2);

        let err = failed()
            .or_throw_kind::<ServiceError>(Some("quotes down"))
            .unwrap_err();
        assert_eq!(err.message(), "quotes down");
        assert!(err.has_in_chain::<RateLimited>());
    }

    #[test]
    fn test_abort_helpers() {
        let cases = [
            (failed().or_bad_request(None), 400),
            (failed().or_unauthorized(None), 401),
            (failed().or_forbidden(None), 403),
            (failed().or_not_found(None), 404),
            (failed().or_conflict(None), 409),
            (failed().or_unprocessable(None), 422),
            (failed().or_too_many_requests(None), 429),
            (failed().or_server_error(None), 500),
        ];
        for (result, code) in cases {
            let err = result.unwrap_err();
            let abort = err.downcast_ref::<HttpAbort>().unwrap();
            assert_eq!(abort.status().code(), code);
            assert_eq!(abort.message(), "slow down");
            assert!(abort.has_in_chain::<RateLimited>());
        }

        assert_eq!(ok().or_not_found(None).unwrap(), 7);
        let err = failed().abort(HttpStatus::ServiceUnavailable, Some("maintenance"));
        assert_eq!(err.unwrap_err().message(), "maintenance");
    }

    #[test]
    fn test_map_and_into_result() {
        assert_eq!(ok().map(|v| v * 2).into_result().unwrap(), 14);
        assert!(failed().map(|v| v * 2).into_result().is_err());

        let result: Result<i32> = ok().into();
        assert_eq!(result.unwrap(), 7);
    }

    #[derive(Default)]
    struct Ping;

    impl Invoke for Ping {
        type Output = &'static str;

        fn invoke(self) -> Result<&'static str> {
            Ok("pong")
        }
    }

    #[derive(Default)]
    struct Broken;

    impl Handle for Broken {
        type Output = &'static str;

        fn handle(self) -> Result<&'static str> {
            Err(Failure::new("handler exploded").into())
        }
    }

    #[test]
    fn test_construction_from_computations() {
        assert_eq!(Attempt::<&str>::of::<Ping>().get().unwrap(), "pong");

        let handled = Attempt::<&str>::of_handler::<Broken>();
        assert!(handled.is_failure());
        assert_eq!(handled.error().unwrap().message(), "handler exploded");

        let attempt = Attempt::new(Computation::invoker(Ping)).unwrap();
        assert_eq!(attempt.get().unwrap(), "pong");

        let attempt = Attempt::new(Computation::handler(Broken)).unwrap();
        assert!(attempt.is_failure());
        assert!(attempt.error().unwrap().is::<Failure>());
    }

    #[test]
    fn test_named_resolution() {
        let mut registry = Registry::new();
        registry.register_invoker::<Ping>("ping");

        let attempt = Attempt::with_registry(Computation::named("ping"), &registry).unwrap();
        assert_eq!(attempt.get().unwrap(), "pong");

        let usage = Attempt::with_registry(Computation::named("pong"), &registry)
            .err()
            .unwrap();
        assert!(usage.message().contains("'pong'"));

        assert!(Attempt::new(Computation::<&str>::named("ping")).is_err());
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", ok()), "Succeeded(7)");
        assert!(format!("{:?}", failed()).starts_with("Failed(RateLimited"));
    }
}
