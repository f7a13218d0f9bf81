//! The capability every error kind implements.

use std::any::Any;

use serde_json::Value;

use crate::{Bag, ErrorNode, Thrown};

/// An error kind: a Rust type that owns one [`ErrorNode`].
///
/// Implementors only provide access to their node; everything else
/// (chain walking, annotation builders, wrapping) is layered on top through
/// extension traits. Use the [`exception!`](crate::exception) macro to
/// declare a kind in one line.
pub trait Exception: std::error::Error + AsException + Send + Sync + 'static {
    fn node(&self) -> &ErrorNode;

    fn node_mut(&mut self) -> &mut ErrorNode;

    /// Short name of the kind, used when formatting groups and reports.
    fn kind_name(&self) -> &'static str {
        self.short_type_name()
    }

    fn message(&self) -> &str {
        self.node().message()
    }

    fn code(&self) -> i64 {
        self.node().code()
    }

    /// The error this one wraps (its cause).
    fn wrapped(&self) -> Option<&Thrown> {
        self.node().cause()
    }

    fn has_wrapped(&self) -> bool {
        self.node().cause().is_some()
    }

    fn context(&self) -> &Bag {
        self.node().context()
    }

    fn context_value(&self, key: &str) -> Option<&Value> {
        self.node().context().get(key)
    }

    fn tags(&self) -> &[String] {
        self.node().tags()
    }

    fn has_tag(&self, tag: &str) -> bool {
        self.node().tags().iter().any(|t| t == tag)
    }

    fn metadata(&self) -> &Bag {
        self.node().metadata()
    }

    fn metadata_value(&self, key: &str) -> Option<&Value> {
        self.node().metadata().get(key)
    }

    fn notes(&self) -> &[String] {
        self.node().notes()
    }
}

/// Upcasts available on every [`Exception`], including `dyn Exception`.
pub trait AsException {
    fn as_exception(&self) -> &dyn Exception;

    fn as_any(&self) -> &dyn Any;

    fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static);

    fn short_type_name(&self) -> &'static str;
}

impl<T: Exception> AsException for T {
    fn as_exception(&self) -> &dyn Exception {
        self
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn short_type_name(&self) -> &'static str {
        short_name(std::any::type_name::<T>())
    }
}

impl dyn Exception {
    /// Whether the concrete kind of this node is `K`.
    pub fn is<K: Exception>(&self) -> bool {
        self.as_any().is::<K>()
    }

    pub fn downcast_ref<K: Exception>(&self) -> Option<&K> {
        self.as_any().downcast_ref::<K>()
    }
}

/// Identity comparison of two nodes, ignoring vtables.
pub fn same_node(a: &dyn Exception, b: &dyn Exception) -> bool {
    std::ptr::addr_eq(a as *const dyn Exception, b as *const dyn Exception)
}

fn short_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Declare an error kind.
///
/// The generated type embeds an [`ErrorNode`], implements [`Exception`],
/// [`Reconstruct`](crate::Reconstruct), `Display`, `Debug` and
/// `std::error::Error`, and gets a `new(message)` constructor.
///
/// ```rust
/// errchain_core::exception! {
///     /// Raised when a record is missing.
///     pub struct RecordMissing { code: 404 }
/// }
///
/// errchain_core::exception!(pub struct StorageFailed);
///
/// let err = RecordMissing::new("user 7 not found");
/// assert_eq!(errchain_core::Exception::code(&err), 404);
/// ```
#[macro_export]
macro_rules! exception {
    ($(#[$meta:meta])* $vis:vis struct $name:ident $(;)?) => {
        $crate::exception!($(#[$meta])* $vis struct $name { code: 0 });
    };
    ($(#[$meta:meta])* $vis:vis struct $name:ident { code: $code:expr $(,)? } $(;)?) => {
        $(#[$meta])*
        #[derive(Clone)]
        $vis struct $name {
            node: $crate::ErrorNode,
        }

        impl $name {
            /// Default code carried by freshly created values of this kind.
            pub const DEFAULT_CODE: i64 = $code;

            pub fn new(message: impl Into<String>) -> Self {
                Self {
                    node: $crate::ErrorNode::with_parts(message, Self::DEFAULT_CODE, None),
                }
            }
        }

        impl $crate::Exception for $name {
            fn node(&self) -> &$crate::ErrorNode {
                &self.node
            }

            fn node_mut(&mut self) -> &mut $crate::ErrorNode {
                &mut self.node
            }

            fn kind_name(&self) -> &'static str {
                stringify!($name)
            }
        }

        impl $crate::Reconstruct for $name {
            fn reconstruct(message: String, code: i64, cause: Option<$crate::Thrown>) -> Self {
                Self {
                    node: $crate::ErrorNode::with_parts(message, code, cause),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.node.message())
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}: {:?}", stringify!($name), self.node)
            }
        }

        impl ::std::error::Error for $name {
            fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
                self.node.cause().map(|cause| {
                    let source: &(dyn ::std::error::Error + 'static) =
                        $crate::AsException::as_error(&**cause);
                    source
                })
            }
        }
    };
}
