//! Unified error types for the crate.

use reqwest::StatusCode;
use thiserror::Error;

/// Top-level error for search-store operations.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Underlying HTTP transport error (connection refused, timeout, ...).
    #[error("search engine transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The engine answered with a non-success HTTP status.
    #[error("search engine returned {status} from {url}: {snippet}")]
    Status {
        status: StatusCode,
        url: String,
        snippet: String,
    },

    /// Response payload could not be decoded as expected.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid or unsupported configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Trims a response body down to a short, single-line snippet for logs
/// and error messages.
pub(crate) fn make_snippet(body: &str) -> String {
    const MAX: usize = 200;
    let mut s: String = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if s.len() > MAX {
        let mut end = MAX;
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        s.truncate(end);
        s.push('…');
    }
    s
}
