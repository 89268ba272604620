//! Stand-in for the SMS gateway.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::PhoneNumber;
use crate::domain::errors::NetworkError;
use crate::domain::ports::CodeDeliveryPort;

/// Pretends to text a code after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedCodeDelivery {
    delay: Duration,
    fail: bool,
}

impl SimulatedCodeDelivery {
    /// Creates delivery that succeeds after `delay`.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    /// Makes every delivery fail after the delay.
    #[must_use]
    pub const fn failing(mut self, fail: bool) -> Self {
        self.fail = fail;
        self
    }
}

#[async_trait]
impl CodeDeliveryPort for SimulatedCodeDelivery {
    async fn send(&self, phone_number: &PhoneNumber) -> Result<(), NetworkError> {
        debug!(phone = %phone_number.masked(), delay = ?self.delay, "Simulating SMS delivery");
        tokio::time::sleep(self.delay).await;

        if self.fail {
            return Err(NetworkError::unavailable("simulated SMS gateway outage"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_delivery_waits_for_delay() {
        let delivery = SimulatedCodeDelivery::new(Duration::from_secs(1));
        let phone = PhoneNumber::new("13521032797").unwrap();
        let start = tokio::time::Instant::now();

        delivery.send(&phone).await.unwrap();

        assert!(start.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_delivery() {
        let delivery = SimulatedCodeDelivery::new(Duration::ZERO).failing(true);
        let phone = PhoneNumber::new("13521032797").unwrap();

        assert!(matches!(
            delivery.send(&phone).await,
            Err(NetworkError::Unavailable { .. })
        ));
    }
}
