//! Authenticated session.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::PhoneNumber;

/// Session returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: Uuid,
    phone_number: PhoneNumber,
    signed_in_at: DateTime<Utc>,
}

impl Session {
    /// Creates a fresh session for the phone number.
    #[must_use]
    pub fn new(phone_number: PhoneNumber) -> Self {
        Self {
            id: Uuid::new_v4(),
            phone_number,
            signed_in_at: Utc::now(),
        }
    }

    /// Returns session ID.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns signed-in phone number.
    #[must_use]
    pub const fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    /// Returns sign-in time.
    #[must_use]
    pub const fn signed_in_at(&self) -> DateTime<Utc> {
        self.signed_in_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessions_are_unique() {
        let phone = PhoneNumber::new("13521032797").unwrap();
        let a = Session::new(phone.clone());
        let b = Session::new(phone);

        assert_ne!(a.id(), b.id());
        assert_eq!(a.phone_number().as_str(), "13521032797");
        assert!(a.signed_in_at() <= Utc::now());
    }
}
