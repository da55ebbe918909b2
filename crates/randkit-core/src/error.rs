//! Error type shared by generators, encoders and the facade.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Rejected before any entropy was consumed: zero length, empty charset,
    /// `max < min`, malformed encoded text, unknown strategy name.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The generator could not deliver the requested bytes.
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn unavailable(msg: impl Into<String>) -> Self {
        Self::SourceUnavailable(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
