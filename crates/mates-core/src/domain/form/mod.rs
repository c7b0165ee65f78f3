//! Form engine
//!
//! Per-field validation rules and the pure reducer that maintains form
//! state between keystrokes and submission.

mod reducer;
mod rules;

pub use reducer::{reduce, FormAction, FormState};
pub use rules::{validate, validate_input, FieldId, FieldRule};
