//! Resource Loader
//!
//! GET requests through a blocking reqwest client.

use std::collections::BTreeMap;

use reqwest::blocking::Client;
use reqwest::header::COOKIE;

use crate::NetError;

const USER_AGENT: &str = concat!("ladle/", env!("CARGO_PKG_VERSION"));

/// Request configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub url: String,
    /// Headers set on the request. Names are case-insensitive on the wire,
    /// so keys differing only in case collapse into one header.
    pub headers: BTreeMap<String, String>,
    /// Cookies sent in a single `Cookie` header
    pub cookies: BTreeMap<String, String>,
}

impl Request {
    pub fn get(url: &str) -> Self {
        Self {
            url: url.to_string(),
            ..Default::default()
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_cookie(mut self, name: &str, value: &str) -> Self {
        self.cookies.insert(name.to_string(), value.to_string());
        self
    }

    /// Headers keyed by lowercase name, one value per name.
    ///
    /// When two keys differ only in case the later key in map order wins.
    pub fn wire_headers(&self) -> BTreeMap<String, &str> {
        self.headers
            .iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value.as_str()))
            .collect()
    }

    /// `Cookie` header value, or `None` without cookies
    pub fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        let pairs: Vec<String> = self
            .cookies
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        Some(pairs.join("; "))
    }
}

/// Load documents from the network
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Fetcher with a default client
    pub fn new() -> Result<Self, NetError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(NetError::Client)?;
        Ok(Self { client })
    }

    /// Fetcher using a caller-configured client (timeouts, proxies, TLS)
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// GET `req.url` and return the body as text.
    ///
    /// The HTTP status is not checked; error pages are returned like any
    /// other document.
    pub fn fetch(&self, req: &Request) -> Result<String, NetError> {
        tracing::info!("HTTP GET {}", req.url);

        let transport = |source: reqwest::Error| NetError::Transport {
            url: req.url.clone(),
            source,
        };

        let mut builder = self.client.get(&req.url);
        for (name, value) in req.wire_headers() {
            builder = builder.header(name, value);
        }
        if let Some(cookies) = req.cookie_header() {
            builder = builder.header(COOKIE, cookies);
        }

        let request = builder.build().map_err(transport)?;
        let response = self.client.execute(request).map_err(transport)?;
        let status = response.status();

        let body = response.text().map_err(|source| NetError::Read { source })?;
        tracing::debug!("{} {} ({} bytes)", status, req.url, body.len());
        Ok(body)
    }
}
