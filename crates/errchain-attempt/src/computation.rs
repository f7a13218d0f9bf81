//! What an attempt can run.
//!
//! A computation is one of a closed set of shapes, all normalized into a
//! single zero-argument thunk before anything runs:
//!
//! - a closure
//! - an instance with an `invoke` entry point ([`Invoke`])
//! - an instance with a `handle` entry point ([`Handle`])
//! - a name looked up in a [`Registry`]
//!
//! Resolution problems (an unknown name, no registry to look it up in) are
//! usage errors and surface as [`InvalidArgument`] before the computation
//! runs.

use std::collections::HashMap;
use std::fmt;

use errchain_core::{Annotate, InvalidArgument, Result, Thrown};

/// A normalized computation, ready to run once.
pub type Thunk<T> = Box<dyn FnOnce() -> Result<T>>;

type Factory<T> = Box<dyn Fn() -> Thunk<T> + Send + Sync>;

/// Something that can be run through its `invoke` entry point.
pub trait Invoke {
    type Output;

    fn invoke(self) -> Result<Self::Output>;
}

/// Something that can be run through its `handle` entry point.
pub trait Handle {
    type Output;

    fn handle(self) -> Result<Self::Output>;
}

pub enum Computation<T> {
    Closure(Thunk<T>),
    Invoker(Thunk<T>),
    Handler(Thunk<T>),
    Named(String),
}

impl<T: 'static> Computation<T> {
    pub fn closure<F, E>(f: F) -> Self
    where
        F: FnOnce() -> std::result::Result<T, E> + 'static,
        E: Into<Thrown>,
    {
        Self::Closure(Box::new(move || f().map_err(Into::into)))
    }

    pub fn invoker<I>(instance: I) -> Self
    where
        I: Invoke<Output = T> + 'static,
    {
        Self::Invoker(Box::new(move || instance.invoke()))
    }

    pub fn handler<H>(instance: H) -> Self
    where
        H: Handle<Output = T> + 'static,
    {
        Self::Handler(Box::new(move || instance.handle()))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Turn this computation into a thunk, looking names up in `registry`.
    pub fn resolve(
        self,
        registry: Option<&Registry<T>>,
    ) -> std::result::Result<Thunk<T>, InvalidArgument> {
        match self {
            Self::Closure(thunk) | Self::Invoker(thunk) | Self::Handler(thunk) => Ok(thunk),
            Self::Named(name) => match registry {
                Some(registry) => registry.resolve(&name),
                None => Err(InvalidArgument::new(format!(
                    "cannot resolve computation '{name}' without a registry"
                ))
                .with_context_entry("computation", name)),
            },
        }
    }

    pub fn shape(&self) -> &'static str {
        match self {
            Self::Closure(_) => "closure",
            Self::Invoker(_) => "invoker",
            Self::Handler(_) => "handler",
            Self::Named(_) => "named",
        }
    }
}

impl<T> fmt::Debug for Computation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closure(_) => f.write_str("Computation::Closure"),
            Self::Invoker(_) => f.write_str("Computation::Invoker"),
            Self::Handler(_) => f.write_str("Computation::Handler"),
            Self::Named(name) => write!(f, "Computation::Named({name})"),
        }
    }
}

/// Names mapped to computations that produce a `T`.
///
/// Entries are factories: every resolution builds a fresh instance.
pub struct Registry<T> {
    entries: HashMap<String, Factory<T>>,
}

impl<T: 'static> Registry<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a type run through [`Invoke`], built with `Default`.
    pub fn register_invoker<I>(&mut self, name: impl Into<String>) -> &mut Self
    where
        I: Invoke<Output = T> + Default + 'static,
    {
        self.insert(
            name.into(),
            Box::new(|| -> Thunk<T> { Box::new(|| I::default().invoke()) }),
        );
        self
    }

    /// Register a type run through [`Handle`], built with `Default`.
    pub fn register_handler<H>(&mut self, name: impl Into<String>) -> &mut Self
    where
        H: Handle<Output = T> + Default + 'static,
    {
        self.insert(
            name.into(),
            Box::new(|| -> Thunk<T> { Box::new(|| H::default().handle()) }),
        );
        self
    }

    /// Register a plain function.
    pub fn register_fn<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn() -> Result<T> + Clone + Send + Sync + 'static,
    {
        self.insert(
            name.into(),
            Box::new(move || -> Thunk<T> {
                let f = f.clone();
                Box::new(move || f())
            }),
        );
        self
    }

    fn insert(&mut self, name: String, factory: Factory<T>) {
        if self.entries.insert(name.clone(), factory).is_some() {
            tracing::debug!("replacing registered computation '{}'", name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn resolve(&self, name: &str) -> std::result::Result<Thunk<T>, InvalidArgument> {
        match self.entries.get(name) {
            Some(factory) => Ok(factory()),
            None => Err(InvalidArgument::new(format!(
                "computation '{name}' has no invoke or handle entry point"
            ))
            .with_context_entry("computation", name)),
        }
    }
}

impl<T: 'static> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use errchain_core::Exception;

    errchain_core::exception!(struct Overdrawn);

    #[derive(Default)]
    struct SumJob;

    impl Invoke for SumJob {
        type Output = i32;

        fn invoke(self) -> Result<i32> {
            Ok(1 + 2)
        }
    }

    #[derive(Default)]
    struct WithdrawHandler;

    impl Handle for WithdrawHandler {
        type Output = i32;

        fn handle(self) -> Result<i32> {
            Err(Overdrawn::new("balance too low").into())
        }
    }

    #[test]
    fn test_every_shape_resolves() {
        let thunk = Computation::closure(|| Ok::<_, Overdrawn>(5)).resolve(None).unwrap();
        assert_eq!(thunk().unwrap(), 5);

        let thunk = Computation::invoker(SumJob).resolve(None).unwrap();
        assert_eq!(thunk().unwrap(), 3);

        let thunk = Computation::handler(WithdrawHandler).resolve(None).unwrap();
        assert!(thunk().unwrap_err().is::<Overdrawn>());
    }

    #[test]
    fn test_named_lookup() {
        let mut registry: Registry<i32> = Registry::new();
        registry
            .register_invoker::<SumJob>("sum")
            .register_handler::<WithdrawHandler>("withdraw")
            .register_fn("answer", || Ok(42));

        assert_eq!(registry.len(), 3);
        assert!(registry.contains("withdraw"));

        let thunk = Computation::named("sum").resolve(Some(&registry)).unwrap();
        assert_eq!(thunk().unwrap(), 3);

        let thunk = Computation::named("answer").resolve(Some(&registry)).unwrap();
        assert_eq!(thunk().unwrap(), 42);

        // factories hand out a fresh thunk each time
        let again = Computation::named("answer").resolve(Some(&registry)).unwrap();
        assert_eq!(again().unwrap(), 42);
    }

    #[test]
    fn test_unknown_name_is_usage_error() {
        let registry: Registry<i32> = Registry::new();
        let err = Computation::named("missing")
            .resolve(Some(&registry))
            .err()
            .unwrap();
        assert!(err.message().contains("'missing'"));
        assert_eq!(
            err.context_value("computation"),
            Some(&serde_json::json!("missing"))
        );
    }

    #[test]
    fn test_named_without_registry() {
        let err = Computation::<i32>::named("sum").resolve(None).err().unwrap();
        assert!(err.message().contains("without a registry"));
    }

    #[test]
    fn test_shape() {
        assert_eq!(Computation::invoker(SumJob).shape(), "invoker");
        assert_eq!(Computation::<i32>::named("x").shape(), "named");
    }
}
