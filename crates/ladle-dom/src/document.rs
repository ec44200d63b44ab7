//! Document - owns the tree of one parsed page

use crate::{DomTree, NodeData, NodeId};

/// HTML Document
#[derive(Debug, Default)]
pub struct Document {
    /// The DOM tree
    tree: DomTree,
    /// Document URL
    url: String,
}

impl Document {
    /// Wrap an already built tree
    pub fn new(url: &str, tree: DomTree) -> Self {
        Self {
            tree,
            url: url.to_string(),
        }
    }

    /// Create a document with an empty tree
    pub fn empty(url: &str) -> Self {
        Self::new(url, DomTree::new())
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// First true element of the document.
    ///
    /// Walks down from the document node, stepping into the document's
    /// children and over doctype, comment and stray text nodes until an
    /// element is reached.
    pub fn root_element(&self) -> Option<NodeId> {
        let mut current = self.tree.root();
        loop {
            let node = self.tree.get(current)?;
            current = match node.data {
                NodeData::Element(_) => return Some(current),
                NodeData::Document => node.first_child.get()?,
                NodeData::Doctype { .. } | NodeData::Comment(_) | NodeData::Text(_) => {
                    node.next_sibling.get()?
                }
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_element_skips_wrappers() {
        let mut doc = Document::empty("about:blank");
        let tree = doc.tree_mut();
        let doctype = tree.create_doctype("html", "", "");
        let comment = tree.create_comment(" banner ");
        let html = tree.create_element("html");
        tree.append_child(tree.root(), doctype);
        tree.append_child(tree.root(), comment);
        tree.append_child(tree.root(), html);

        assert_eq!(doc.root_element(), Some(html));
    }

    #[test]
    fn test_root_element_missing() {
        let mut doc = Document::empty("about:blank");
        let tree = doc.tree_mut();
        let comment = tree.create_comment("only a comment");
        tree.append_child(tree.root(), comment);

        assert_eq!(doc.root_element(), None);
        assert_eq!(Document::empty("about:blank").root_element(), None);
    }
}
