//! Structural navigation: parent, children and siblings

use ladle_dom::NodeId;

use crate::{NodeView, QueryError};

/// Which node kinds a listing returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeFilter {
    /// Elements only
    #[default]
    Elements,
    /// Elements, text, comments and everything else
    All,
}

impl NodeFilter {
    fn accepts(self, view: &NodeView<'_>) -> bool {
        match self {
            Self::Elements => view.is_element(),
            Self::All => true,
        }
    }
}

impl<'a> NodeView<'a> {
    /// Direct element children in document order
    pub fn children(&self) -> Vec<NodeView<'a>> {
        self.children_with(NodeFilter::Elements)
    }

    /// Direct children of the kinds accepted by `filter`
    pub fn children_with(&self, filter: NodeFilter) -> Vec<NodeView<'a>> {
        self.tree()
            .children(self.id())
            .map(|(id, node)| self.child(id, node))
            .filter(|view| filter.accepts(view))
            .collect()
    }

    /// Every following element sibling. Preceding siblings are not included.
    pub fn siblings(&self) -> Vec<NodeView<'a>> {
        self.siblings_with(NodeFilter::Elements)
    }

    /// Every following sibling of the kinds accepted by `filter`
    pub fn siblings_with(&self, filter: NodeFilter) -> Vec<NodeView<'a>> {
        let tree = self.tree();
        std::iter::successors(tree.next_sibling(self.id()), |&id| tree.next_sibling(id))
            .filter_map(|id| self.sibling(id))
            .filter(|view| filter.accepts(view))
            .collect()
    }

    /// Immediate next sibling of any kind
    pub fn find_next_sibling(&self) -> Result<NodeView<'a>, QueryError> {
        self.step(Direction::Next)
            .ok_or_else(|| QueryError::not_found("next sibling"))
    }

    /// Immediate previous sibling of any kind
    pub fn find_prev_sibling(&self) -> Result<NodeView<'a>, QueryError> {
        self.step(Direction::Prev)
            .ok_or_else(|| QueryError::not_found("previous sibling"))
    }

    /// Nearest following sibling that is an element, skipping text and comments
    pub fn find_next_element_sibling(&self) -> Result<NodeView<'a>, QueryError> {
        self.element_step(Direction::Next)
            .ok_or_else(|| QueryError::not_found("next element sibling"))
    }

    /// Nearest preceding sibling that is an element, skipping text and comments
    pub fn find_prev_element_sibling(&self) -> Result<NodeView<'a>, QueryError> {
        self.element_step(Direction::Prev)
            .ok_or_else(|| QueryError::not_found("previous element sibling"))
    }

    /// The parent this view was reached from.
    ///
    /// Fails on a view created as a root, which has no parent link.
    pub fn find_parent(&self) -> Result<NodeView<'a>, QueryError> {
        self.parent_view()
            .ok_or_else(|| QueryError::not_found("parent"))
    }

    fn step(&self, direction: Direction) -> Option<NodeView<'a>> {
        let id = direction.neighbor(self)?;
        self.sibling(id)
    }

    fn element_step(&self, direction: Direction) -> Option<NodeView<'a>> {
        let mut current = self.step(direction)?;
        while !current.is_element() {
            current = current.step(direction)?;
        }
        Some(current)
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Next,
    Prev,
}

impl Direction {
    fn neighbor(self, view: &NodeView<'_>) -> Option<NodeId> {
        match self {
            Self::Next => view.tree().next_sibling(view.id()),
            Self::Prev => view.tree().prev_sibling(view.id()),
        }
    }
}
