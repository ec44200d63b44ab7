//! Node View
//!
//! A read-only handle onto one node of a [`DomTree`] plus a back-reference to
//! its logical parent. The back-reference is an arena index into the same
//! tree, so views never own their parents and are free to copy.

use std::fmt;

use ladle_dom::{Document, DomTree, Node, NodeId, NodeKind};

use crate::QueryError;

/// Read-only handle onto a node of a parsed document
#[derive(Clone, Copy)]
pub struct NodeView<'a> {
    tree: &'a DomTree,
    id: NodeId,
    node: &'a Node,
    /// Parent link. Always the tree parent of `node` when present.
    parent: Option<NodeId>,
    /// Tree parent of the node the view chain was derived from. Parent
    /// links never reach it, so the anchor and its siblings have none.
    limit: Option<NodeId>,
}

impl<'a> NodeView<'a> {
    /// View onto the first element of `doc`, past any doctype or comments.
    pub fn root(doc: &'a Document) -> Result<Self, QueryError> {
        doc.root_element()
            .and_then(|id| Self::new(doc.tree(), id))
            .ok_or_else(|| QueryError::not_found("root element"))
    }

    /// View onto an arbitrary node, with no parent link.
    ///
    /// Returns `None` if `node` does not belong to `tree`.
    pub fn new(tree: &'a DomTree, node: NodeId) -> Option<Self> {
        tree.get(node).map(|n| Self {
            tree,
            id: node,
            node: n,
            parent: None,
            limit: tree.parent(node),
        })
    }

    /// View onto a direct child of this node
    pub(crate) fn child(&self, id: NodeId, node: &'a Node) -> Self {
        Self {
            tree: self.tree,
            id,
            node,
            parent: Some(self.id),
            limit: self.limit,
        }
    }

    /// View onto a sibling of this node, sharing its parent link
    pub(crate) fn sibling(&self, id: NodeId) -> Option<Self> {
        Some(Self {
            tree: self.tree,
            id,
            node: self.tree.get(id)?,
            parent: self.parent,
            limit: self.limit,
        })
    }

    /// View onto the parent, re-deriving the parent's own link.
    pub(crate) fn parent_view(&self) -> Option<Self> {
        let parent = self.parent?;
        let grandparent = self.tree.parent(parent).filter(|&gp| Some(gp) != self.limit);
        Some(Self {
            tree: self.tree,
            id: parent,
            node: self.tree.get(parent)?,
            parent: grandparent,
            limit: self.limit,
        })
    }

    /// Underlying node ID
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Parent link, if this view has one
    #[inline]
    pub fn parent_id(&self) -> Option<NodeId> {
        self.parent
    }

    /// Tree this view observes
    #[inline]
    pub fn tree(&self) -> &'a DomTree {
        self.tree
    }

    /// Underlying node
    #[inline]
    pub fn node(&self) -> &'a Node {
        self.node
    }

    /// Kind of the underlying node
    pub fn kind(&self) -> NodeKind {
        self.node().kind()
    }

    /// Check if the underlying node is an element
    pub fn is_element(&self) -> bool {
        self.node().is_element()
    }

    /// Tag name for elements, content for text and comments
    pub fn name(&self) -> &'a str {
        self.node().name()
    }
}

impl PartialEq for NodeView<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id && self.parent == other.parent
    }
}

impl Eq for NodeView<'_> {}

impl fmt::Debug for NodeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeView")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .field("name", &self.name())
            .field("parent", &self.parent)
            .finish()
    }
}
