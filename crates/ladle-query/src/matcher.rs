//! Element matcher
//!
//! Decides whether a node satisfies a tag name and an optional attribute
//! constraint. Loose matching compares whitespace-separated words, the way a
//! class list is matched; strict matching compares the raw value.

use std::fmt;

use crate::{NodeView, QueryError};

/// How attribute values are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Every word of the expected value appears among the node's words
    #[default]
    Loose,
    /// Exact byte-for-byte equality
    Strict,
}

/// Attribute requirement of a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrConstraint {
    pub name: String,
    pub value: String,
}

/// What a search looks for
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Criteria {
    /// Tag name. Empty matches any element.
    pub tag: String,
    pub attr: Option<AttrConstraint>,
    pub strictness: Strictness,
}

impl Criteria {
    /// Any element with the given tag name
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Any element at all
    pub fn any() -> Self {
        Self::default()
    }

    /// Require attribute `name` to match `value`
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attr = Some(AttrConstraint {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Compare attribute values exactly
    pub fn strict(mut self) -> Self {
        self.strictness = Strictness::Strict;
        self
    }

    /// Build criteria from positional values: nothing, a tag, or a tag
    /// followed by an attribute name and value.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, QueryError> {
        match args {
            [] => Ok(Self::any()),
            [tag] => Ok(Self::tag(tag.as_ref())),
            [tag, name, value] => {
                Ok(Self::tag(tag.as_ref()).with_attr(name.as_ref(), value.as_ref()))
            }
            _ => Err(QueryError::InvalidArgumentShape(args.len())),
        }
    }

    /// Check `view` against these criteria
    pub fn matches(&self, view: &NodeView<'_>) -> bool {
        let Some(elem) = view.node().as_element() else {
            return false;
        };
        if !self.tag.is_empty() && self.tag != elem.name {
            return false;
        }

        tracing::trace!("Matching <{}> against {}", elem.name, self);

        let Some(constraint) = &self.attr else {
            return true;
        };
        elem.attrs
            .iter()
            .filter(|a| a.name == constraint.name)
            .any(|a| value_matches(&a.value, &constraint.value, self.strictness))
    }
}

/// Compare an attribute value `actual` against `expected`
pub(crate) fn value_matches(actual: &str, expected: &str, strictness: Strictness) -> bool {
    match strictness {
        Strictness::Strict => actual == expected,
        Strictness::Loose => expected
            .split_whitespace()
            .all(|word| actual.split_whitespace().any(|w| w == word)),
    }
}

impl From<&str> for Criteria {
    fn from(tag: &str) -> Self {
        Self::tag(tag)
    }
}

impl From<String> for Criteria {
    fn from(tag: String) -> Self {
        Self::tag(tag)
    }
}

impl From<(&str, &str, &str)> for Criteria {
    fn from((tag, name, value): (&str, &str, &str)) -> Self {
        Self::tag(tag).with_attr(name, value)
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element `{}`", self.tag)?;
        if let Some(attr) = &self.attr {
            write!(f, " with attributes `{} {}`", attr.name, attr.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ladle_dom::DomTree;

    fn tree_with_div(class: &str) -> (DomTree, ladle_dom::NodeId) {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        tree.element_mut(div).unwrap().push_attr("class", class);
        tree.append_child(tree.root(), div);
        (tree, div)
    }

    #[test]
    fn test_loose_value_is_word_subset() {
        assert!(value_matches("a b c", "b", Strictness::Loose));
        assert!(value_matches("a b c", "c a", Strictness::Loose));
        assert!(value_matches("  a\tb ", "b a", Strictness::Loose));
        assert!(!value_matches("a b", "a d", Strictness::Loose));
        assert!(!value_matches("ab", "a", Strictness::Loose));
    }

    #[test]
    fn test_loose_empty_expected_is_vacuous() {
        assert!(value_matches("a b", "", Strictness::Loose));
        assert!(value_matches("", "   ", Strictness::Loose));
    }

    #[test]
    fn test_strict_value_is_exact() {
        assert!(value_matches("a b", "a b", Strictness::Strict));
        assert!(!value_matches("a b", "b", Strictness::Strict));
        assert!(!value_matches("a b", "b a", Strictness::Strict));
        assert!(!value_matches("a  b", "a b", Strictness::Strict));
    }

    #[test]
    fn test_matches_element_only() {
        let mut tree = DomTree::new();
        let text = tree.create_text("div");
        tree.append_child(tree.root(), text);
        let view = NodeView::new(&tree, text).unwrap();

        assert!(!Criteria::any().matches(&view));
        assert!(!Criteria::tag("div").matches(&view));
    }

    #[test]
    fn test_matches_tag_and_attr() {
        let (tree, div) = tree_with_div("a b");
        let view = NodeView::new(&tree, div).unwrap();

        assert!(Criteria::any().matches(&view));
        assert!(Criteria::tag("div").matches(&view));
        assert!(!Criteria::tag("span").matches(&view));
        assert!(Criteria::tag("div").with_attr("class", "b").matches(&view));
        assert!(!Criteria::tag("div").with_attr("class", "b").strict().matches(&view));
        assert!(Criteria::tag("div").with_attr("class", "a b").strict().matches(&view));
        assert!(Criteria::tag("").with_attr("class", "a").matches(&view));
    }

    #[test]
    fn test_missing_attr_never_matches() {
        let (tree, div) = tree_with_div("a");
        let view = NodeView::new(&tree, div).unwrap();

        assert!(!Criteria::tag("div").with_attr("id", "").matches(&view));
        assert!(Criteria::tag("div").with_attr("class", "").matches(&view));
    }

    #[test]
    fn test_from_args_shapes() {
        assert_eq!(Criteria::from_args::<&str>(&[]), Ok(Criteria::any()));
        assert_eq!(Criteria::from_args(&["p"]), Ok(Criteria::tag("p")));
        assert_eq!(
            Criteria::from_args(&["a", "rel", "next"]),
            Ok(Criteria::tag("a").with_attr("rel", "next"))
        );
        assert_eq!(
            Criteria::from_args(&["a", "rel"]),
            Err(QueryError::InvalidArgumentShape(2))
        );
        assert_eq!(
            Criteria::from_args(&["a", "b", "c", "d"]),
            Err(QueryError::InvalidArgumentShape(4))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Criteria::tag("p").to_string(), "element `p`");
        assert_eq!(
            Criteria::tag("div").with_attr("class", "x y").to_string(),
            "element `div` with attributes `class x y`"
        );
    }
}
