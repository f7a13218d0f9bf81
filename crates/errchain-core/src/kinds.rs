//! Built-in error kinds.

use std::fmt;

use crate::{AsException, ErrorNode, Exception, HttpStatus, Reconstruct, Thrown};

crate::exception! {
    /// Generic failure, used when a foreign error is captured.
    pub struct Failure
}

crate::exception! {
    /// A caller handed in something unusable.
    pub struct InvalidArgument
}

impl Failure {
    /// Capture a foreign error. The foreign source chain is kept as notes.
    pub fn capture<E>(error: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        let mut failure = Self::new(error.to_string());
        let mut source = error.source();
        while let Some(inner) = source {
            failure.node_mut().push_note(inner.to_string());
            source = inner.source();
        }
        failure
    }

    fn with_io_kind(mut self, kind: std::io::ErrorKind) -> Self {
        self.node_mut()
            .merge_context([("io_kind", format!("{kind:?}"))]);
        self
    }
}

impl From<std::io::Error> for Thrown {
    fn from(error: std::io::Error) -> Self {
        Failure::capture(&error)
            .with_io_kind(error.kind())
            .into()
    }
}

/// Signal for the request layer: stop handling and answer with `status`.
///
/// The code of the node is the numeric status.
#[derive(Clone)]
pub struct HttpAbort {
    node: ErrorNode,
    status: HttpStatus,
}

impl HttpAbort {
    /// Abort with the reason phrase as message when none is given.
    pub fn new(status: HttpStatus, message: Option<&str>) -> Self {
        let message = message.unwrap_or(status.reason());
        Self {
            node: ErrorNode::with_parts(message, i64::from(status.code()), None),
            status,
        }
    }

    pub fn caused_by(status: HttpStatus, message: Option<&str>, cause: Thrown) -> Self {
        let message = message.unwrap_or(status.reason());
        Self {
            node: ErrorNode::with_parts(message, i64::from(status.code()), Some(cause)),
            status,
        }
    }

    pub fn status(&self) -> HttpStatus {
        self.status
    }
}

impl Exception for HttpAbort {
    fn node(&self) -> &ErrorNode {
        &self.node
    }

    fn node_mut(&mut self) -> &mut ErrorNode {
        &mut self.node
    }

    fn kind_name(&self) -> &'static str {
        "HttpAbort"
    }
}

impl Reconstruct for HttpAbort {
    fn reconstruct(message: String, code: i64, cause: Option<Thrown>) -> Self {
        let status = u16::try_from(code)
            .ok()
            .and_then(HttpStatus::from_code)
            .unwrap_or(HttpStatus::InternalServerError);
        Self {
            node: ErrorNode::with_parts(message, i64::from(status.code()), cause),
            status,
        }
    }

    fn rebuild(&self, cause: Thrown) -> Self {
        Self {
            node: ErrorNode::with_parts(self.message(), self.code(), Some(cause)),
            status: self.status,
        }
    }
}

impl fmt::Display for HttpAbort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status.code(), self.node.message())
    }
}

impl fmt::Debug for HttpAbort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HttpAbort [{}]: {:?}", self.status.code(), self.node)
    }
}

impl std::error::Error for HttpAbort {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.node.cause().map(|cause| {
            let source: &(dyn std::error::Error + 'static) = AsException::as_error(&**cause);
            source
        })
    }
}
