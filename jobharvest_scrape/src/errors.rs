//! Error types for page fetching and extraction.

use reqwest::StatusCode;

/// Errors that can occur while fetching or extracting a career-site page.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// The HTTP request itself failed (network error or timeout).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// The site answered with a non-success status.
    #[error("unexpected status {status}")]
    HttpStatus { status: StatusCode },
    /// A selector the extractor depends on matched nothing.
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    /// The page structure was present but a value could not be interpreted.
    #[error("parse error: {0}")]
    Parse(String),
}
