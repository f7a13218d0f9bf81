//! Human and machine readable renderings of a whole chain.

use std::fmt;

use serde_json::{Map, Value};

use crate::{ChainExt, Exception, ExceptionGroup};

/// Multi-line report of `error` and everything it wraps.
///
/// ```text
/// UserRepositoryError: could not load user (code 500)
///     context: {"user":7}
///     tags: repo
///
/// Caused by:
///     0: StorageDriverError: socket closed
/// ```
pub fn render(error: &dyn Exception) -> String {
    Report(error).to_string()
}

/// `Display` adapter producing the same text as [`render`].
pub struct Report<'a>(pub &'a dyn Exception);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut nodes = self.0.chain().into_iter();

        if let Some(head) = nodes.next() {
            write_node(f, head, "")?;
        }

        let mut causes = nodes.enumerate().peekable();
        if causes.peek().is_some() {
            f.write_str("\n\nCaused by:")?;
        }
        for (index, node) in causes {
            write!(f, "\n    {index}: ")?;
            write_node(f, node, "    ")?;
        }
        Ok(())
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &dyn Exception, indent: &str) -> fmt::Result {
    write!(f, "{}: {}", node.kind_name(), node.message())?;
    if node.code() != 0 {
        write!(f, " (code {})", node.code())?;
    }
    if !node.context().is_empty() {
        write!(f, "\n{indent}    context: {}", Value::Object(node.context().clone()))?;
    }
    if !node.tags().is_empty() {
        write!(f, "\n{indent}    tags: {}", node.tags().join(", "))?;
    }
    if !node.metadata().is_empty() {
        write!(f, "\n{indent}    metadata: {}", Value::Object(node.metadata().clone()))?;
    }
    for note in node.notes() {
        write!(f, "\n{indent}    note: {note}")?;
    }
    if let Some(group) = node.downcast_ref::<ExceptionGroup>() {
        for (index, member) in group.iter().enumerate() {
            write!(
                f,
                "\n{indent}    [{}] {}: {}",
                index + 1,
                member.kind_name(),
                member.message()
            )?;
        }
    }
    Ok(())
}

/// JSON snapshot of `error`; causes nest under `"cause"`.
pub fn to_json(error: &dyn Exception) -> Value {
    error
        .chain()
        .into_iter()
        .rev()
        .fold(Value::Null, |cause, node| {
            let mut object = node_json(node);
            object.insert("cause".to_string(), cause);
            Value::Object(object)
        })
}

fn node_json(node: &dyn Exception) -> Map<String, Value> {
    let mut object = Map::new();
    object.insert("kind".to_string(), Value::from(node.kind_name()));
    object.insert("message".to_string(), Value::from(node.message()));
    object.insert("code".to_string(), Value::from(node.code()));
    object.insert("context".to_string(), Value::Object(node.context().clone()));
    object.insert("tags".to_string(), Value::from(node.tags().to_vec()));
    object.insert("metadata".to_string(), Value::Object(node.metadata().clone()));
    object.insert("notes".to_string(), Value::from(node.notes().to_vec()));
    if let Some(group) = node.downcast_ref::<ExceptionGroup>() {
        let members = group.iter().map(|member| to_json(member.exception())).collect();
        object.insert("exceptions".to_string(), Value::Array(members));
    }
    object
}
