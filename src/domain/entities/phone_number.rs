//! Phone number value object.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Maximum number of digits the phone field accepts.
pub const PHONE_NUMBER_MAX_LEN: usize = 11;

static PHONE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^1[3-9]\d{9}$").expect("Invalid regex"));

/// Mainland mobile number: 11 digits, leading `1`, second digit `3`-`9`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    value: String,
}

impl PhoneNumber {
    /// Creates phone number with format validation.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        Self::is_valid(&value).then_some(Self { value })
    }

    /// Returns whether the input matches the mobile number pattern exactly.
    #[must_use]
    pub fn is_valid(input: &str) -> bool {
        PHONE_NUMBER_RE.is_match(input)
    }

    /// Returns number as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns number with the middle four digits hidden.
    #[must_use]
    pub fn masked(&self) -> String {
        format!("{}****{}", &self.value[..3], &self.value[7..])
    }
}

impl fmt::Debug for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PhoneNumber").field(&self.masked()).finish()
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Keeps ASCII digits only and truncates to `max_len`.
#[must_use]
pub fn sanitize_digits(input: &str, max_len: usize) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(max_len)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("13521032797", true ; "valid_number")]
    #[test_case("19912345678", true ; "second_digit_nine")]
    #[test_case("12345678901", false ; "second_digit_two")]
    #[test_case("1352103279", false ; "ten_digits")]
    #[test_case("135210327970", false ; "twelve_digits")]
    #[test_case("23521032797", false ; "wrong_leading_digit")]
    #[test_case("1352103279a", false ; "non_digit")]
    #[test_case("", false ; "empty")]
    fn test_is_valid(input: &str, expected: bool) {
        assert_eq!(PhoneNumber::is_valid(input), expected);
    }

    #[test]
    fn test_new_rejects_invalid() {
        assert!(PhoneNumber::new("12345678901").is_none());
        assert_eq!(
            PhoneNumber::new("13521032797").unwrap().as_str(),
            "13521032797"
        );
    }

    #[test]
    fn test_masked() {
        let phone = PhoneNumber::new("13521032797").unwrap();
        assert_eq!(phone.masked(), "135****2797");
        assert_eq!(format!("{phone:?}"), "PhoneNumber(\"135****2797\")");
    }

    #[test]
    fn test_sanitize_digits() {
        assert_eq!(sanitize_digits("135-2103 2797", 11), "13521032797");
        assert_eq!(sanitize_digits("1352103279799", 11), "13521032797");
        assert_eq!(sanitize_digits("12a34b", 6), "1234");
        assert_eq!(sanitize_digits("１２３", 6), "");
    }
}
