//! Value objects
//!
//! Immutable, validated primitives shared by the form engine and the
//! aggregates.

mod email;
mod location;
mod password;
mod phone;
mod text;

pub use email::{Email, EmailError};
pub use location::{GeoPoint, GeocodeResult, Location};
pub use password::{Password, PasswordError};
pub use phone::{PhoneNumber, PhoneError};
pub use text::{FreeText, FreeTextError};
