//! Ladle
//!
//! Fetch an HTML document, parse it, then find elements by tag name and
//! attribute and pull out their text.
//!
//! ```ignore
//! let config = Config::default().header("Accept-Language", "en");
//! let html = ladle::get("https://example.com", &config)?;
//! let doc = ladle::parse(&html)?;
//! let root = NodeView::root(&doc)?;
//! for link in root.find_all("a") {
//!     println!("{} -> {}", link.full_text(), link.attr("href"));
//! }
//! ```

mod config;
mod error;

pub use config::Config;
pub use error::Error;

pub use ladle_dom::{Document, NodeId, NodeKind};
pub use ladle_html::{HtmlParser, ParseError};
pub use ladle_net::{Fetcher, NetError, Request};
pub use ladle_query::{
    AttrConstraint, AttributeSet, Criteria, Descendants, NodeFilter, NodeView, QueryError,
    Strictness,
};

/// GET `url` with the headers and cookies of `config`, using a default client
pub fn get(url: &str, config: &Config) -> Result<String, Error> {
    let fetcher = config.check(Fetcher::new())?;
    config.check(fetcher.fetch(&config.request(url)))
}

/// GET `url` through a caller-configured client
pub fn get_with_client(
    url: &str,
    client: reqwest::blocking::Client,
    config: &Config,
) -> Result<String, Error> {
    config.check(Fetcher::with_client(client).fetch(&config.request(url)))
}

/// Parse an HTML document
pub fn parse(html: &str) -> Result<Document, Error> {
    Ok(ladle_html::parse(html)?)
}
