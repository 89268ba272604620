//! Collaborator transport errors.

use thiserror::Error;

/// Failure talking to a backend collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum NetworkError {
    #[error("request timed out")]
    Timeout,

    #[error("service unavailable: {message}")]
    Unavailable { message: String },
}

impl NetworkError {
    /// Creates timeout error.
    #[must_use]
    pub const fn timeout() -> Self {
        Self::Timeout
    }

    /// Creates unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}
