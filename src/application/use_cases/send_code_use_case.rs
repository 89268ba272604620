//! Verification code request use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::PhoneNumber;
use crate::domain::errors::NetworkError;
use crate::domain::ports::CodeDeliveryPort;

/// Asks the delivery service to text a code to the user.
#[derive(Clone)]
pub struct SendCodeUseCase {
    delivery_port: Arc<dyn CodeDeliveryPort>,
}

impl SendCodeUseCase {
    /// Creates new send-code use case.
    #[must_use]
    pub const fn new(delivery_port: Arc<dyn CodeDeliveryPort>) -> Self {
        Self { delivery_port }
    }

    /// Sends a verification code.
    ///
    /// # Errors
    /// Returns error if the delivery service cannot be reached.
    pub async fn execute(&self, phone_number: &PhoneNumber) -> Result<(), NetworkError> {
        debug!(phone = %phone_number.masked(), "Requesting verification code");

        match self.delivery_port.send(phone_number).await {
            Ok(()) => {
                info!(phone = %phone_number.masked(), "Verification code delivered");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Verification code delivery failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockCodeDelivery;

    #[tokio::test]
    async fn test_delivery_success() {
        let port = Arc::new(MockCodeDelivery::new(true));
        let use_case = SendCodeUseCase::new(port.clone());
        let phone = PhoneNumber::new("13521032797").unwrap();

        assert!(use_case.execute(&phone).await.is_ok());
        assert_eq!(port.calls(), 1);
    }

    #[tokio::test]
    async fn test_delivery_failure() {
        let use_case = SendCodeUseCase::new(Arc::new(MockCodeDelivery::new(false)));
        let phone = PhoneNumber::new("13521032797").unwrap();

        assert_eq!(
            use_case.execute(&phone).await,
            Err(NetworkError::Timeout)
        );
    }
}
