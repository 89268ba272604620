//! Modal alert shown to the user.

use super::errors::LoginError;

/// Alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// Informational.
    Info,
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Error,
}

/// Single-message alert. At most one is visible at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Severity.
    pub kind: AlertKind,
    /// User-facing text.
    pub message: String,
}

impl Alert {
    /// Creates informational alert.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Info,
            message: message.into(),
        }
    }

    /// Creates success alert.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
        }
    }

    /// Creates error alert.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }
}

impl From<&LoginError> for Alert {
    fn from(error: &LoginError) -> Self {
        Self::error(error.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_from_error() {
        let alert = Alert::from(&LoginError::InvalidPhoneNumber);
        assert_eq!(alert.kind, AlertKind::Error);
        assert_eq!(alert.message, LoginError::InvalidPhoneNumber.message());
    }
}
