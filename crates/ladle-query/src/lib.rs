//! Ladle Query Engine
//!
//! Finds elements by tag name and attribute constraints, walks structural
//! relations and extracts text from a parsed document tree.
//!
//! Everything starts from a [`NodeView`]:
//!
//! ```ignore
//! let doc = ladle_html::parse(r#"<div class="a b"><span>hi</span></div>"#)?;
//! let root = NodeView::root(&doc)?;
//! let div = root.find(("div", "class", "b"))?;
//! assert_eq!(div.find_all("span")[0].full_text(), "hi");
//! ```

mod attrs;
mod error;
mod matcher;
mod navigate;
mod search;
mod text;
mod view;

pub use attrs::AttributeSet;
pub use error::QueryError;
pub use matcher::{AttrConstraint, Criteria, Strictness};
pub use navigate::NodeFilter;
pub use search::Descendants;
pub use view::NodeView;
