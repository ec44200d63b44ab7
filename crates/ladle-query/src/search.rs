//! Tree search
//!
//! Both searches walk descendants in document order (depth-first pre-order)
//! and never test the node they start from. `find` stops at the first hit;
//! `find_all` collects every hit.

use crate::{Criteria, NodeView, QueryError, Strictness};

/// Lazy pre-order iterator over the descendants of a view, of every kind.
///
/// Yielded views carry correct parent links.
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<NodeView<'a>>,
}

impl<'a> Descendants<'a> {
    fn new(start: &NodeView<'a>) -> Self {
        let mut stack = Vec::new();
        push_children(&mut stack, start);
        Self { stack }
    }
}

/// Push the children of `view` so that the first child is popped first
fn push_children<'a>(stack: &mut Vec<NodeView<'a>>, view: &NodeView<'a>) {
    let start = stack.len();
    stack.extend(
        view.tree()
            .children(view.id())
            .map(|(id, node)| view.child(id, node)),
    );
    stack[start..].reverse();
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let view = self.stack.pop()?;
        push_children(&mut self.stack, &view);
        Some(view)
    }
}

impl<'a> NodeView<'a> {
    /// Every descendant in document order, excluding this node
    pub fn descendants(&self) -> Descendants<'a> {
        Descendants::new(self)
    }

    /// First descendant matching `criteria`, in document order.
    ///
    /// The node itself is never tested. Attribute values are compared with
    /// the strictness the criteria were built with (loose by default).
    pub fn find(&self, criteria: impl Into<Criteria>) -> Result<NodeView<'a>, QueryError> {
        self.find_matching(&criteria.into())
    }

    /// Like [`find`](Self::find), with exact attribute value comparison
    pub fn find_strict(&self, criteria: impl Into<Criteria>) -> Result<NodeView<'a>, QueryError> {
        self.find_matching(&criteria.into().strict())
    }

    /// First descendant matching `criteria`, or `NotFound`
    pub fn find_matching(&self, criteria: &Criteria) -> Result<NodeView<'a>, QueryError> {
        self.descendants()
            .find(|view| criteria.matches(view))
            .ok_or_else(|| QueryError::not_found(criteria.to_string()))
    }

    /// Every descendant matching `criteria`, in document order.
    ///
    /// The node itself is never included. An empty result is not an error.
    pub fn find_all(&self, criteria: impl Into<Criteria>) -> Vec<NodeView<'a>> {
        self.find_all_matching(&criteria.into())
    }

    /// Like [`find_all`](Self::find_all), with exact attribute value comparison
    pub fn find_all_strict(&self, criteria: impl Into<Criteria>) -> Vec<NodeView<'a>> {
        self.find_all_matching(&Criteria {
            strictness: Strictness::Strict,
            ..criteria.into()
        })
    }

    /// Every descendant matching `criteria`
    pub fn find_all_matching(&self, criteria: &Criteria) -> Vec<NodeView<'a>> {
        self.descendants().filter(|view| criteria.matches(view)).collect()
    }
}
