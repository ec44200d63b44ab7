//! Attribute access

use ladle_dom::NodeKind;

use crate::{NodeView, QueryError};

/// Attributes of one element, keyed by name.
///
/// When an element repeats an attribute name the first occurrence wins.
/// Iteration follows the order of first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet<'a> {
    entries: Vec<(&'a str, &'a str)>,
}

impl<'a> AttributeSet<'a> {
    fn from_pairs(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut entries: Vec<(&'a str, &'a str)> = Vec::new();
        for (name, value) in pairs {
            if !entries.iter().any(|(n, _)| *n == name) {
                entries.push((name, value));
            }
        }
        Self { entries }
    }

    /// Value of `name`
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.entries.iter().copied()
    }
}

impl<'a> IntoIterator for AttributeSet<'a> {
    type Item = (&'a str, &'a str);
    type IntoIter = std::vec::IntoIter<(&'a str, &'a str)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> NodeView<'a> {
    /// All attributes of this element.
    ///
    /// Fails with `WrongNodeKind` on anything but an element.
    pub fn attrs(&self) -> Result<AttributeSet<'a>, QueryError> {
        let elem = self
            .node()
            .as_element()
            .ok_or_else(|| QueryError::WrongNodeKind {
                expected: NodeKind::Element,
                found: self.kind(),
            })?;
        Ok(AttributeSet::from_pairs(
            elem.attrs.iter().map(|a| (a.name.as_str(), a.value.as_str())),
        ))
    }

    /// Check if this element carries attribute `name`
    pub fn has_attr(&self, name: &str) -> bool {
        self.node()
            .as_element()
            .is_some_and(|e| e.get_attr(name).is_some())
    }

    /// Value of attribute `name`, or the empty string when absent.
    ///
    /// Use [`has_attr`](Self::has_attr) to tell an absent attribute from an
    /// empty one.
    pub fn attr(&self, name: &str) -> &'a str {
        self.node()
            .as_element()
            .and_then(|e| e.get_attr(name))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ladle_dom::DomTree;

    #[test]
    fn test_first_occurrence_wins() {
        let set = AttributeSet::from_pairs([("href", "/a"), ("rel", "x"), ("href", "/b")]);

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("href"), Some("/a"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![("href", "/a"), ("rel", "x")]);
    }

    #[test]
    fn test_attrs_on_element() {
        let mut tree = DomTree::new();
        let a = tree.create_element("a");
        tree.element_mut(a).unwrap().push_attr("href", "/x");
        tree.element_mut(a).unwrap().push_attr("download", "");
        tree.append_child(tree.root(), a);
        let view = NodeView::new(&tree, a).unwrap();

        let attrs = view.attrs().unwrap();
        assert!(attrs.contains("download"));
        assert_eq!(view.attr("href"), "/x");
        assert!(view.has_attr("download"));
        assert_eq!(view.attr("download"), "");
        assert!(!view.has_attr("title"));
        assert_eq!(view.attr("title"), "");
    }

    #[test]
    fn test_attrs_on_text_fails() {
        let mut tree = DomTree::new();
        let text = tree.create_text("hi");
        tree.append_child(tree.root(), text);
        let view = NodeView::new(&tree, text).unwrap();

        assert_eq!(
            view.attrs(),
            Err(QueryError::WrongNodeKind {
                expected: NodeKind::Element,
                found: NodeKind::Text,
            })
        );
        assert!(!view.has_attr("class"));
        assert_eq!(view.attr("class"), "");
    }

    #[test]
    fn test_attrs_empty_element() {
        let mut tree = DomTree::new();
        let br = tree.create_element("br");
        tree.append_child(tree.root(), br);
        let view = NodeView::new(&tree, br).unwrap();

        assert!(view.attrs().unwrap().is_empty());
    }
}
