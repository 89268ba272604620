//! Verification code delivery port definition.

use async_trait::async_trait;

use crate::domain::entities::PhoneNumber;
use crate::domain::errors::NetworkError;

/// Port for sending one-time codes to a phone.
#[async_trait]
pub trait CodeDeliveryPort: Send + Sync {
    /// Sends a fresh verification code to the number.
    async fn send(&self, phone_number: &PhoneNumber) -> Result<(), NetworkError>;
}
