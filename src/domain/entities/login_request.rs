//! Login request value.

use super::{PhoneNumber, VerificationCode};

/// Credentials captured at submit time. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    /// Validated phone number.
    pub phone_number: PhoneNumber,
    /// Validated verification code.
    pub verification_code: VerificationCode,
}

impl LoginRequest {
    /// Creates new login request.
    #[must_use]
    pub const fn new(phone_number: PhoneNumber, verification_code: VerificationCode) -> Self {
        Self {
            phone_number,
            verification_code,
        }
    }
}
