//! Ladle HTML Parser
//!
//! HTML5 parser built on html5ever. Produces a [`Document`] whose tree keeps
//! every text node, whitespace-only ones included.

mod parser;

pub use ladle_dom::Document;
pub use parser::HtmlParser;

/// Parse an HTML string into a [`Document`]
pub fn parse(html: &str) -> Result<Document, ParseError> {
    HtmlParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unable to parse the HTML: {0}")]
    Io(#[from] std::io::Error),
}
