//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it into the arena tree.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use ladle_dom::{Document, DomTree, ElementData, NodeId};
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::ParseError;

/// HTML5 parser
#[derive(Debug, Clone, Copy)]
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Result<Document, ParseError> {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse HTML with a base URL
    pub fn parse_with_url(&self, html: &str, url: &str) -> Result<Document, ParseError> {
        tracing::debug!("Parsing HTML document: {}", url);

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let tree = self.convert(&dom.document);

        tracing::debug!("Parsed {} nodes", tree.len());
        Ok(Document::new(url, tree))
    }

    /// Copy the RcDom tree into the arena, using a work stack of
    /// `(node, arena parent)` pairs instead of recursion.
    fn convert(&self, document: &Handle) -> DomTree {
        let mut tree = DomTree::new();
        let mut stack: Vec<(Handle, NodeId)> = Vec::new();
        push_children(&mut stack, document, tree.root());

        while let Some((handle, parent)) = stack.pop() {
            let id = match &handle.data {
                // Only the top-level document node, already represented by the arena root
                RcNodeData::Document => continue,
                RcNodeData::Doctype {
                    name,
                    public_id,
                    system_id,
                } => tree.create_doctype(name, public_id, system_id),
                RcNodeData::Text { contents } => tree.create_text(&contents.borrow()),
                RcNodeData::Comment { contents } => tree.create_comment(contents),
                RcNodeData::Element { name, attrs, .. } => {
                    let mut elem = ElementData::new(&*name.local);
                    for attr in attrs.borrow().iter() {
                        elem.push_attr(&*attr.name.local, &*attr.value);
                    }
                    tree.create_element_with(elem)
                }
                RcNodeData::ProcessingInstruction { .. } => continue,
            };
            tree.append_child(parent, id);
            push_children(&mut stack, &handle, id);
        }

        tree
    }
}

/// Queue the children of `handle` so they pop in document order
fn push_children(stack: &mut Vec<(Handle, NodeId)>, handle: &Handle, parent: NodeId) {
    let children = handle.children.borrow();
    stack.extend(children.iter().rev().map(|child| (child.clone(), parent)));
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
        let doc = HtmlParser::new().parse(html).unwrap();

        // document + html + head + title + text + body + p + text
        assert_eq!(doc.tree().len(), 8);
    }

    #[test]
    fn test_parse_fragment_is_wrapped() {
        let doc = HtmlParser::new().parse("<div><span>Text</span></div>").unwrap();
        let root = doc.root_element().unwrap();

        assert_eq!(doc.tree().get(root).unwrap().name(), "html");
    }

    #[test]
    fn test_whitespace_text_kept() {
        let doc = HtmlParser::new().parse("<p>  <b>x</b></p>").unwrap();

        assert_eq!(texts_in_order(doc.tree()), vec!["  ", "x"]);
    }

    #[test]
    fn test_doctype_and_comment_kept() {
        let doc = HtmlParser::new()
            .parse("<!DOCTYPE html><!-- top --><html><body></body></html>")
            .unwrap();
        let kinds: Vec<_> = doc
            .tree()
            .children(doc.tree().root())
            .map(|(_, n)| n.kind())
            .collect();

        assert_eq!(
            kinds,
            vec![
                ladle_dom::NodeKind::Doctype,
                ladle_dom::NodeKind::Comment,
                ladle_dom::NodeKind::Element,
            ]
        );
    }

    fn texts_in_order(tree: &DomTree) -> Vec<&str> {
        let mut stack = vec![tree.root()];
        let mut texts = Vec::new();
        while let Some(id) = stack.pop() {
            if let Some(text) = tree.get(id).and_then(|n| n.as_text()) {
                texts.push(text);
            }
            let kids: Vec<NodeId> = tree.children(id).map(|(c, _)| c).collect();
            stack.extend(kids.into_iter().rev());
        }
        texts
    }
}
