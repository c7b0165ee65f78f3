//! Validation rules
//!
//! Pure predicates classifying a raw field value as valid or invalid for
//! its field. No side effects, no panics; an unknown field id fails
//! closed.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Email, FreeText, Password};

/// Identifier of a known form field
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    FullName,
    Email,
    Password,
    PhoneNumber,
    BloodType,
    Location,
    Hospital,
    City,
    Mobile,
    DateOfBirth,
    LastDonationDate,
    OrganizerName,
    OrganizationName,
    Address,
    DonationDate,
    Note,
}

impl FieldId {
    /// Parse a wire-level field identifier. Returns `None` for ids this
    /// system does not know, which the validator treats as invalid.
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "fullName" => Some(Self::FullName),
            "email" => Some(Self::Email),
            "password" => Some(Self::Password),
            "phoneNumber" => Some(Self::PhoneNumber),
            "bloodType" => Some(Self::BloodType),
            "location" => Some(Self::Location),
            "hospital" => Some(Self::Hospital),
            "city" => Some(Self::City),
            "mobile" => Some(Self::Mobile),
            "DOB" => Some(Self::DateOfBirth),
            "lastDonationDate" => Some(Self::LastDonationDate),
            "organizerName" => Some(Self::OrganizerName),
            "organizationName" => Some(Self::OrganizationName),
            "address" => Some(Self::Address),
            "donationDate" => Some(Self::DonationDate),
            "note" => Some(Self::Note),
            _ => None,
        }
    }

    /// The rule class applied to this field
    pub fn rule(self) -> FieldRule {
        match self {
            Self::Email => FieldRule::Email,
            Self::Password => FieldRule::Password,
            _ => FieldRule::FreeText,
        }
    }
}

/// Semantic class of a field, determining which predicate applies
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldRule {
    /// Non-empty, characters limited to letters, digits, commas, spaces
    FreeText,
    /// Non-empty, standard email-address grammar
    Email,
    /// Non-empty, at least six characters
    Password,
}

/// Validate a raw value against the rule for a known field
pub fn validate(field: FieldId, value: &str) -> bool {
    match field.rule() {
        FieldRule::FreeText => FreeText::is_valid(value),
        FieldRule::Email => Email::is_valid(value),
        FieldRule::Password => Password::is_valid(value),
    }
}

/// Validate by wire-level field id; unknown ids fail closed
pub fn validate_input(id: &str, value: &str) -> bool {
    match FieldId::parse(id) {
        Some(field) => validate(field, value),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_text_fields() {
        assert!(validate(FieldId::FullName, "John Doe"));
        assert!(validate(FieldId::BloodType, "O positive"));
        assert!(validate(FieldId::Address, "12, Gandhi Road, Chennai"));
        assert!(!validate(FieldId::FullName, ""));
        assert!(!validate(FieldId::Address, "12/4 Main St."));
        assert!(!validate(FieldId::BloodType, "O+"));
    }

    #[test]
    fn test_email_field() {
        assert!(validate(FieldId::Email, "donor@example.com"));
        assert!(!validate(FieldId::Email, "donor@"));
        assert!(!validate(FieldId::Email, ""));
    }

    #[test]
    fn test_password_field() {
        assert!(validate(FieldId::Password, "secret1"));
        assert!(!validate(FieldId::Password, "short"));
        assert!(!validate(FieldId::Password, ""));
    }

    #[test]
    fn test_unknown_field_fails_closed() {
        assert!(!validate_input("favoriteColor", "red"));
        assert!(!validate_input("", "anything"));
    }

    #[test]
    fn test_validate_is_pure() {
        for (id, value) in [("email", "donor@example.com"), ("fullName", "Jane")] {
            assert_eq!(validate_input(id, value), validate_input(id, value));
        }
    }

    #[test]
    fn test_wire_ids_round_trip() {
        assert_eq!(FieldId::parse("DOB"), Some(FieldId::DateOfBirth));
        assert_eq!(FieldId::parse("mobile"), Some(FieldId::Mobile));
        assert_eq!(FieldId::parse("dob"), None);
    }
}
