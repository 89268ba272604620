//! Login use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{LoginRequest, Session};
use crate::domain::errors::LoginError;
use crate::domain::ports::AuthPort;

/// Exchanges validated credentials for a session.
#[derive(Clone)]
pub struct LoginUseCase {
    auth_port: Arc<dyn AuthPort>,
}

impl LoginUseCase {
    /// Creates new login use case.
    #[must_use]
    pub const fn new(auth_port: Arc<dyn AuthPort>) -> Self {
        Self { auth_port }
    }

    /// Executes login with provided request.
    ///
    /// # Errors
    /// Returns error if the credentials are rejected or the service is unreachable.
    pub async fn execute(&self, request: &LoginRequest) -> Result<Session, LoginError> {
        debug!(phone = %request.phone_number.masked(), "Attempting login");

        let session = self.auth_port.login(request).await.map_err(|e| {
            warn!(error = %e, "Authentication failed");
            e
        })?;

        info!(
            session_id = %session.id(),
            phone = %session.phone_number().masked(),
            "Successfully authenticated"
        );

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{PhoneNumber, VerificationCode};
    use crate::domain::ports::mocks::MockAuthPort;

    fn make_request() -> LoginRequest {
        LoginRequest::new(
            PhoneNumber::new("13521032797").unwrap(),
            VerificationCode::new("000000").unwrap(),
        )
    }

    #[tokio::test]
    async fn test_successful_login() {
        let auth_port = Arc::new(MockAuthPort::new(true));
        let use_case = LoginUseCase::new(auth_port.clone());

        let session = use_case.execute(&make_request()).await.unwrap();

        assert_eq!(session.phone_number().as_str(), "13521032797");
        assert_eq!(auth_port.calls(), 1);
    }

    #[tokio::test]
    async fn test_rejected_login() {
        let auth_port = Arc::new(MockAuthPort::new(false));
        let use_case = LoginUseCase::new(auth_port);

        let result = use_case.execute(&make_request()).await;

        assert!(matches!(result, Err(LoginError::Network(_))));
    }
}
