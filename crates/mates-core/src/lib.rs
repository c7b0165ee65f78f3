//! BloodMates Coordination Core
//!
//! Domain, ports, and application services for the blood-donation
//! coordination platform.
//!
//! ## Architecture
//!
//! - **Domain Layer**: validated value objects, the form engine
//!   (validation rules + reducer), and the submitted-record aggregates
//! - **Application Layer**: the submission pipeline and directory queries
//! - **Ports Layer**: hexagonal interfaces for persistence, geocoding,
//!   notification, and authentication
//! - **Infrastructure Layer**: in-memory implementations and the
//!   sequence allocator
//!
//! ## Key Aggregates
//!
//! - **DonorProfile**: a registered donor, keyed by the auth-issued uid
//! - **DonationRequest**: a posted request for blood
//! - **Campaign**: a scheduled donation campaign

pub mod domain;
pub mod application;
pub mod ports;
pub mod infrastructure;

// Re-exports for convenience
pub use domain::aggregates::{Campaign, DonationRequest, DonorProfile};
pub use domain::form::{validate_input, FieldId, FormAction, FormState};
pub use domain::value_objects::{Email, GeoPoint, GeocodeResult, Location, Password, PhoneNumber};
pub use application::{DirectoryService, SubmissionService};
pub use application::dto::{
    CampaignCard, CampaignSubmission, DonorCard, DonorRegistration, RequestCard,
    RequestSubmission,
};
pub use ports::inbound::{DirectoryUseCases, SubmissionError, SubmissionUseCases};
pub use ports::outbound::{
    AuthError, AuthPort, CampaignRepository, DonorRepository, LookupError, Notification,
    Notifier, PersistenceError, RequestRepository, ReverseGeocoder,
};
pub use infrastructure::auth::InMemoryAuth;
pub use infrastructure::persistence::{
    InMemoryCampaignRepository, InMemoryDonorRepository, InMemoryRequestRepository,
};
pub use infrastructure::sequence::{Collection, SequenceAllocator};
