//! Error Types

use thiserror::Error;

/// Why a move request did not succeed
#[derive(Debug, Error)]
pub enum MoveError {
    /// Server answered with a non-2xx status
    #[error("server rejected move with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// Request never completed
    #[error("network failure: {0}")]
    Network(String),
    #[error("could not encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Failures while reading or wiring the page
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("selector `{0}` failed")]
    Selector(String),
    #[error("element is not a {0}")]
    Cast(&'static str),
    #[error("could not attach listener: {0}")]
    Listener(String),
    #[error("drag library binding failed: {0}")]
    Bind(String),
}
