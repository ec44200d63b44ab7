//! Unified error type

use ladle_html::ParseError;
use ladle_net::NetError;
use ladle_query::QueryError;

/// Any failure surfaced by Ladle
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Net(#[from] NetError),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
