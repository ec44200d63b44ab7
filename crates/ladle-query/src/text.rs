//! Text extraction

use crate::{NodeView, QueryError};

/// Non-empty and made only of whitespace
fn is_blank(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_whitespace)
}

impl<'a> NodeView<'a> {
    /// Content of the first direct text child that is not whitespace-only.
    ///
    /// Nested elements are not searched.
    pub fn text(&self) -> Result<&'a str, QueryError> {
        self.tree()
            .children(self.id())
            .filter_map(|(_, node)| node.as_text())
            .find(|text| !is_blank(text))
            .ok_or_else(|| QueryError::not_found("text node"))
    }

    /// Every text node of the subtree concatenated in document order.
    ///
    /// Spacing between nodes is kept as written; only whitespace at the
    /// very start and end of the result is trimmed.
    pub fn full_text(&self) -> String {
        let text: String = self
            .descendants()
            .filter_map(|view| view.node().as_text())
            .collect();
        text.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ladle_dom::{DomTree, NodeId};

    /// `<p>  <b>x</b> tail</p>`
    fn paragraph(tail: bool) -> (DomTree, NodeId) {
        let mut tree = DomTree::new();
        let p = tree.create_element("p");
        let ws = tree.create_text("  ");
        let b = tree.create_element("b");
        let x = tree.create_text("x");
        tree.append_child(tree.root(), p);
        tree.append_child(p, ws);
        tree.append_child(p, b);
        tree.append_child(b, x);
        if tail {
            let t = tree.create_text(" tail");
            tree.append_child(p, t);
        }
        (tree, p)
    }

    #[test]
    fn test_text_skips_blank_nodes() {
        let (tree, p) = paragraph(true);
        let view = NodeView::new(&tree, p).unwrap();

        assert_eq!(view.text(), Ok(" tail"));
    }

    #[test]
    fn test_text_does_not_descend() {
        let (tree, p) = paragraph(false);
        let view = NodeView::new(&tree, p).unwrap();

        assert_eq!(view.text(), Err(QueryError::NotFound("text node".into())));
        assert_eq!(view.full_text(), "x");
    }

    #[test]
    fn test_full_text_keeps_inner_spacing() {
        let (tree, p) = paragraph(true);
        let view = NodeView::new(&tree, p).unwrap();

        assert_eq!(view.full_text(), "x tail");
    }

    #[test]
    fn test_full_text_keeps_spacing_between_elements() {
        // <p>a <b>b</b> <i>c</i></p>
        let mut tree = DomTree::new();
        let p = tree.create_element("p");
        tree.append_child(tree.root(), p);
        let a = tree.create_text("a ");
        tree.append_child(p, a);
        let b = tree.create_element("b");
        tree.append_child(p, b);
        let b_text = tree.create_text("b");
        tree.append_child(b, b_text);
        let gap = tree.create_text(" ");
        tree.append_child(p, gap);
        let i = tree.create_element("i");
        tree.append_child(p, i);
        let i_text = tree.create_text("c");
        tree.append_child(i, i_text);

        let view = NodeView::new(&tree, p).unwrap();
        assert_eq!(view.full_text(), "a b c");
    }

    #[test]
    fn test_full_text_of_childless_node() {
        let mut tree = DomTree::new();
        let br = tree.create_element("br");
        tree.append_child(tree.root(), br);
        let view = NodeView::new(&tree, br).unwrap();

        assert_eq!(view.full_text(), "");
        assert!(view.text().is_err());
    }

    #[test]
    fn test_blank() {
        assert!(is_blank(" \n\t"));
        assert!(!is_blank(""));
        assert!(!is_blank(" a "));
    }
}
