//! Free Text Value Object
//!
//! The character class accepted by every free-text form field: letters,
//! digits, commas, and spaces. Symbols fail, which notably rejects most
//! punctuation in addresses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated free-text field value
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FreeText(String);

impl FreeText {
    /// Create new validated free text
    pub fn new(value: impl Into<String>) -> Result<Self, FreeTextError> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(FreeTextError::Empty);
        }

        if !value.chars().all(Self::allowed) {
            return Err(FreeTextError::InvalidCharacters);
        }

        Ok(Self(value))
    }

    /// Create without validation (for deserialization)
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the text as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a raw value is non-empty and within the character class
    pub fn is_valid(value: &str) -> bool {
        !value.trim().is_empty() && value.chars().all(Self::allowed)
    }

    fn allowed(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == ',' || c == ' '
    }
}

impl fmt::Display for FreeText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-text validation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FreeTextError {
    /// The field was empty
    #[error("this field is required")]
    Empty,
    /// A character outside letters, digits, commas, and spaces
    #[error("value can only contain letters, numbers, commas, and spaces")]
    InvalidCharacters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_text() {
        assert!(FreeText::new("O positive").is_ok());
        assert!(FreeText::new("Ward 12, City Hospital").is_ok());
    }

    #[test]
    fn test_symbols_rejected() {
        assert!(matches!(
            FreeText::new("12/4 Main St."),
            Err(FreeTextError::InvalidCharacters)
        ));
        assert!(matches!(FreeText::new("O+"), Err(FreeTextError::InvalidCharacters)));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(FreeText::new("   "), Err(FreeTextError::Empty)));
    }
}
