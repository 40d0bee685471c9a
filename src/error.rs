//! Error types for URL building and srcset expansion
//!
//! Every failure in this crate is a caller input error: nothing is transient
//! and nothing is retried. Operations either succeed or fail synchronously.

use thiserror::Error;

/// Errors raised while building URLs or expanding srcsets
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter value or combination is not allowed
    #[error("invalid params: {0}")]
    InvalidParams(String),

    /// Configured secure key or salt is not valid base64
    #[error("invalid secret: {0}")]
    InvalidSecret(String),

    /// Color name is not a known CSS color
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Position directions do not form a valid position
    #[error("invalid position: {0}")]
    InvalidPosition(String),
}

pub type Result<T> = std::result::Result<T, Error>;
