//! Ladle Networking
//!
//! Blocking document retrieval over HTTP with caller-supplied headers and
//! cookies.

pub mod loader;

pub use loader::{Fetcher, Request};

/// Fetch a URL with a default client and no extra headers
pub fn fetch(url: &str) -> Result<String, NetError> {
    Fetcher::new()?.fetch(&Request::get(url))
}

/// Network error
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    /// Request could not be built or sent
    #[error("couldn't perform GET request to {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response body could not be drained
    #[error("unable to read the response body")]
    Read {
        #[source]
        source: reqwest::Error,
    },

    /// Default client could not be constructed
    #[error("unable to build the HTTP client")]
    Client(#[source] reqwest::Error),
}
