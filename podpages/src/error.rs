//! Error types for the pages crate

use thiserror::Error;

/// Result type for page operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a page
#[derive(Error, Debug)]
pub enum Error {
    /// Episode feed error
    #[error("Feed error: {0}")]
    Feed(#[from] podfeed::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}
