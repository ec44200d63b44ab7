//! Configuration
//!
//! Request headers, cookies and the fail-fast switch, passed explicitly to
//! the entry points that need them.

use std::collections::BTreeMap;

use ladle_net::Request;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Options shared by every fetch and query boundary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Headers sent with every request
    pub headers: BTreeMap<String, String>,
    /// Cookies sent with every request
    pub cookies: BTreeMap<String, String>,
    /// Abort on the first failure instead of returning it
    pub debug: bool,
}

impl Config {
    /// Load from a JSON document, e.g. `{"headers": {"Accept": "text/html"}}`
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    pub fn cookie(mut self, name: &str, value: &str) -> Self {
        self.cookies.insert(name.to_string(), value.to_string());
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// GET request for `url` carrying these headers and cookies
    pub fn request(&self, url: &str) -> Request {
        Request {
            url: url.to_string(),
            headers: self.headers.clone(),
            cookies: self.cookies.clone(),
        }
    }

    /// Apply the failure policy to `result`.
    ///
    /// Errors pass through unchanged unless `debug` is set, in which case
    /// they are logged and turned into a panic with the same message.
    pub fn check<T, E: Into<Error>>(&self, result: Result<T, E>) -> Result<T, Error> {
        result.map_err(|err| {
            let err = err.into();
            if self.debug {
                tracing::error!("{}", err);
                panic!("{}", err);
            }
            err
        })
    }
}
