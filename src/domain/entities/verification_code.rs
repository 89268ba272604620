//! Verification code value object.

use std::fmt;

/// Number of characters in a verification code.
pub const VERIFICATION_CODE_LEN: usize = 6;

/// One-time code delivered by SMS.
#[derive(Clone, PartialEq, Eq)]
pub struct VerificationCode {
    value: String,
}

impl VerificationCode {
    /// Creates code with length validation.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        Self::is_valid(&value).then_some(Self { value })
    }

    /// Returns whether the input is exactly six characters long.
    #[must_use]
    pub fn is_valid(input: &str) -> bool {
        input.chars().count() == VERIFICATION_CODE_LEN
    }

    /// Returns code as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VerificationCode(******)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("123456", true ; "six_digits")]
    #[test_case("000000", true ; "all_zero")]
    #[test_case("12345", false ; "five_digits")]
    #[test_case("1234567", false ; "seven_digits")]
    #[test_case("", false ; "empty")]
    fn test_is_valid(input: &str, expected: bool) {
        assert_eq!(VerificationCode::is_valid(input), expected);
    }

    #[test]
    fn test_debug_hides_value() {
        let code = VerificationCode::new("123456").unwrap();
        assert!(!format!("{code:?}").contains("123456"));
    }
}
