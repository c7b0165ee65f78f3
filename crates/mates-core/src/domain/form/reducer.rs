//! Form reducer
//!
//! Deterministic state transitions for multi-field forms. `reduce` is a
//! pure function: it never mutates the input state, and the same
//! (state, action) pair always produces the same new state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::rules::FieldId;

/// Snapshot of a form's per-field values and validities
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    /// Current raw value per field
    pub input_values: BTreeMap<FieldId, String>,
    /// Current validity per field
    pub input_validities: BTreeMap<FieldId, bool>,
    /// Invariant: equals the AND of all entries in `input_validities`
    pub form_is_valid: bool,
}

impl FormState {
    /// Build a state from initial fields. Optional fields start valid
    /// with an empty value; required fields start invalid.
    pub fn new<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (FieldId, bool)>,
    {
        let mut input_values = BTreeMap::new();
        let mut input_validities = BTreeMap::new();
        for (field, initially_valid) in fields {
            input_values.insert(field, String::new());
            input_validities.insert(field, initially_valid);
        }
        let form_is_valid = input_validities.values().all(|v| *v);
        Self {
            input_values,
            input_validities,
            form_is_valid,
        }
    }

    /// Initial state of the donation-request form; only the note is
    /// optional.
    pub fn for_request() -> Self {
        Self::new([
            (FieldId::FullName, false),
            (FieldId::City, false),
            (FieldId::Hospital, false),
            (FieldId::BloodType, false),
            (FieldId::Mobile, false),
            (FieldId::Note, true),
        ])
    }

    /// Initial state of the campaign-scheduling form; only the note is
    /// optional.
    pub fn for_campaign() -> Self {
        Self::new([
            (FieldId::OrganizerName, false),
            (FieldId::OrganizationName, false),
            (FieldId::Address, false),
            (FieldId::DonationDate, false),
            (FieldId::PhoneNumber, false),
            (FieldId::Note, true),
        ])
    }

    /// Initial state of the donor-registration form; the last donation
    /// date is optional.
    pub fn for_registration() -> Self {
        Self::new([
            (FieldId::Email, false),
            (FieldId::Password, false),
            (FieldId::FullName, false),
            (FieldId::PhoneNumber, false),
            (FieldId::BloodType, false),
            (FieldId::Location, false),
            (FieldId::Hospital, false),
            (FieldId::DateOfBirth, false),
            (FieldId::LastDonationDate, true),
        ])
    }

    /// Value of a field, empty if absent
    pub fn value(&self, field: FieldId) -> &str {
        self.input_values.get(&field).map(String::as_str).unwrap_or("")
    }
}

/// An event dispatched at the form
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormAction {
    /// A field's value changed and was re-validated
    UpdateInput {
        field: FieldId,
        value: String,
        is_valid: bool,
    },
    /// Focus moved between fields. The reducer deliberately ignores
    /// this; any action kind it does not handle leaves the state
    /// unchanged.
    FocusChanged { field: FieldId },
}

/// Apply an action to a form state, producing the next state
pub fn reduce(state: &FormState, action: &FormAction) -> FormState {
    match action {
        FormAction::UpdateInput {
            field,
            value,
            is_valid,
        } => {
            let mut next = state.clone();
            next.input_values.insert(*field, value.clone());
            next.input_validities.insert(*field, *is_valid);
            next.form_is_valid = next.input_validities.values().all(|v| *v);
            next
        }
        _ => state.clone(),
    }
}
