//! Stand-in for the authentication backend.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::{LoginRequest, Session};
use crate::domain::errors::LoginError;
use crate::domain::ports::AuthPort;

/// Accepts any well-formed credentials after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedAuthService {
    delay: Duration,
}

impl SimulatedAuthService {
    /// Creates service that answers after `delay`.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl AuthPort for SimulatedAuthService {
    async fn login(&self, request: &LoginRequest) -> Result<Session, LoginError> {
        debug!(
            phone = %request.phone_number.masked(),
            delay = ?self.delay,
            "Simulating login"
        );
        tokio::time::sleep(self.delay).await;

        Ok(Session::new(request.phone_number.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{PhoneNumber, VerificationCode};

    #[tokio::test(start_paused = true)]
    async fn test_login_returns_session_after_delay() {
        let service = SimulatedAuthService::new(Duration::from_secs(2));
        let request = LoginRequest::new(
            PhoneNumber::new("13521032797").unwrap(),
            VerificationCode::new("000000").unwrap(),
        );
        let start = tokio::time::Instant::now();

        let session = service.login(&request).await.unwrap();

        assert!(start.elapsed() >= Duration::from_secs(2));
        assert_eq!(session.phone_number(), &request.phone_number);
    }
}
