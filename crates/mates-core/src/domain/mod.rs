//! Domain layer
//!
//! Value objects, the form engine, and the submitted-record aggregates.

pub mod aggregates;
pub mod form;
pub mod value_objects;
