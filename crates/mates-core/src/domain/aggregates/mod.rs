//! Aggregates
//!
//! The submitted records. Each is created by the submission pipeline and
//! immutable from the application's perspective afterwards: there is no
//! edit or delete flow.

mod campaign;
mod donor;
mod request;

pub use campaign::Campaign;
pub use donor::DonorProfile;
pub use request::DonationRequest;
