//! Phone Number Value Object
//!
//! Digits-only mobile number, as required at submission time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Phone number value object
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new validated phone number
    pub fn new(value: impl Into<String>) -> Result<Self, PhoneError> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(PhoneError::Empty);
        }

        if !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(PhoneError::NonDigit);
        }

        Ok(Self(value))
    }

    /// Create without validation (for deserialization)
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a raw value is all digits and non-empty
    pub fn is_valid(value: &str) -> bool {
        let value = value.trim();
        !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Phone validation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhoneError {
    /// The field was empty
    #[error("mobile number cannot be empty")]
    Empty,
    /// A non-digit character was present
    #[error("mobile number should contain only digits")]
    NonDigit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_number() {
        let phone = PhoneNumber::new("9876543210").unwrap();
        assert_eq!(phone.as_str(), "9876543210");
    }

    #[test]
    fn test_non_digit_rejected() {
        assert!(matches!(PhoneNumber::new("12a45"), Err(PhoneError::NonDigit)));
        assert!(matches!(PhoneNumber::new("+9876"), Err(PhoneError::NonDigit)));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(PhoneNumber::new("  "), Err(PhoneError::Empty)));
    }
}
