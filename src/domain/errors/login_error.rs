//! Login error types.

use thiserror::Error;

use super::NetworkError;

/// Closed set of login failures, each with a fixed user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum LoginError {
    #[error("invalid phone number")]
    InvalidPhoneNumber,

    #[error("invalid verification code")]
    InvalidVerificationCode,

    #[error("network error: {0}")]
    Network(#[from] NetworkError),
}

impl LoginError {
    /// Returns the message shown in the alert.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::InvalidPhoneNumber => "Please enter a valid phone number",
            Self::InvalidVerificationCode => "Please enter the 6-digit verification code",
            Self::Network(_) => "Network error, please try again later",
        }
    }

    /// Returns whether error came from the transport.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_fixed() {
        assert_eq!(
            LoginError::InvalidPhoneNumber.message(),
            "Please enter a valid phone number"
        );
        assert_eq!(
            LoginError::InvalidVerificationCode.message(),
            "Please enter the 6-digit verification code"
        );
        assert_eq!(
            LoginError::from(NetworkError::timeout()).message(),
            LoginError::from(NetworkError::unavailable("down")).message()
        );
    }

    #[test]
    fn test_network_classification() {
        assert!(LoginError::from(NetworkError::timeout()).is_network_error());
        assert!(!LoginError::InvalidPhoneNumber.is_network_error());
    }
}
