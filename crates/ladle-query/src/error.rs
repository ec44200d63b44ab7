//! Query errors

use ladle_dom::NodeKind;

/// Failure of a query operation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Search, navigation or text extraction found nothing
    #[error("{0} not found")]
    NotFound(String),

    /// Positional criteria with an unsupported number of values
    #[error("criteria take a tag, or a tag with an attribute name and value; got {0} values")]
    InvalidArgumentShape(usize),

    /// Operation requires a different kind of node
    #[error("expected {expected} node, found {found} node")]
    WrongNodeKind { expected: NodeKind, found: NodeKind },
}

impl QueryError {
    pub(crate) fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            QueryError::not_found("next sibling").to_string(),
            "next sibling not found"
        );
        assert_eq!(
            QueryError::WrongNodeKind {
                expected: NodeKind::Element,
                found: NodeKind::Text,
            }
            .to_string(),
            "expected element node, found text node"
        );
    }
}
