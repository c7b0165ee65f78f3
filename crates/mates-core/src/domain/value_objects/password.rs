//! Password Value Object
//!
//! Minimum-length checked secret. Never printed in Debug or logs.

use serde::{Deserialize, Serialize};

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 6;

/// Password value object
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Password(String);

impl Password {
    /// Create a new validated password
    pub fn new(value: impl Into<String>) -> Result<Self, PasswordError> {
        let value = value.into();

        if value.is_empty() {
            return Err(PasswordError::Empty);
        }

        if value.chars().count() < MIN_PASSWORD_LEN {
            return Err(PasswordError::TooShort);
        }

        Ok(Self(value))
    }

    /// Get the raw secret
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether a raw value passes the password rule
    pub fn is_valid(value: &str) -> bool {
        !value.is_empty() && value.chars().count() >= MIN_PASSWORD_LEN
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Password(***)")
    }
}

/// Password validation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordError {
    /// The field was empty
    #[error("password cannot be empty")]
    Empty,
    /// Fewer than the minimum number of characters
    #[error("password must be at least {MIN_PASSWORD_LEN} characters")]
    TooShort,
}
