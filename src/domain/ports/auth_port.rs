//! Authentication port definition.

use async_trait::async_trait;

use crate::domain::entities::{LoginRequest, Session};
use crate::domain::errors::LoginError;

/// Port for phone-number authentication.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Exchanges phone number and verification code for a session.
    async fn login(&self, request: &LoginRequest) -> Result<Session, LoginError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    use crate::domain::errors::NetworkError;

    /// Mock authentication port for testing.
    pub struct MockAuthPort {
        should_succeed: Arc<AtomicBool>,
        calls: Arc<AtomicUsize>,
        delay: Duration,
    }

    impl MockAuthPort {
        /// Creates new mock.
        pub fn new(should_succeed: bool) -> Self {
            Self {
                should_succeed: Arc::new(AtomicBool::new(should_succeed)),
                calls: Arc::new(AtomicUsize::new(0)),
                delay: Duration::ZERO,
            }
        }

        /// Delays every response.
        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }

        /// Sets success behavior.
        pub fn set_should_succeed(&self, value: bool) {
            self.should_succeed.store(value, Ordering::SeqCst);
        }

        /// Returns number of login calls received.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AuthPort for MockAuthPort {
        async fn login(&self, request: &LoginRequest) -> Result<Session, LoginError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            if self.should_succeed.load(Ordering::SeqCst) {
                Ok(Session::new(request.phone_number.clone()))
            } else {
                Err(NetworkError::unavailable("mock rejection").into())
            }
        }
    }
}
