//! Outbound ports
//!
//! Interfaces the infrastructure must implement: document collections,
//! reverse geocoding, notification scheduling, and authentication. Every
//! remote failure is represented as a recoverable error; nothing here is
//! allowed to take the process down.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::aggregates::{Campaign, DonationRequest, DonorProfile};
use crate::domain::value_objects::{Email, GeoPoint, GeocodeResult, Password};

/// Donation-request collection port (`don_req`)
#[async_trait]
pub trait RequestRepository: Send + Sync {
    /// Find a request by its sequential id
    async fn find_by_id(&self, id: u64) -> Result<Option<DonationRequest>, PersistenceError>;

    /// All requests, newest first
    async fn list(&self) -> Result<Vec<DonationRequest>, PersistenceError>;

    /// Write one request document, keyed by its id
    async fn save(&self, request: &DonationRequest) -> Result<(), PersistenceError>;

    /// Current number of documents in the collection
    async fn count(&self) -> Result<u64, PersistenceError>;
}

/// Campaign collection port (`campaign`)
#[async_trait]
pub trait CampaignRepository: Send + Sync {
    /// Find a campaign by its sequential id
    async fn find_by_id(&self, id: u64) -> Result<Option<Campaign>, PersistenceError>;

    /// All campaigns, newest first
    async fn list(&self) -> Result<Vec<Campaign>, PersistenceError>;

    /// Write one campaign document, keyed by its id
    async fn save(&self, campaign: &Campaign) -> Result<(), PersistenceError>;

    /// Current number of documents in the collection
    async fn count(&self) -> Result<u64, PersistenceError>;
}

/// Donor collection port (`users`)
#[async_trait]
pub trait DonorRepository: Send + Sync {
    /// Find a donor by the auth-issued uid
    async fn find_by_uid(&self, uid: &str) -> Result<Option<DonorProfile>, PersistenceError>;

    /// Find a donor by email
    async fn find_by_email(&self, email: &Email) -> Result<Option<DonorProfile>, PersistenceError>;

    /// All donors
    async fn list(&self) -> Result<Vec<DonorProfile>, PersistenceError>;

    /// Write one profile document, keyed by uid
    async fn save(&self, donor: &DonorProfile) -> Result<(), PersistenceError>;

    /// Current number of documents in the collection
    async fn count(&self) -> Result<u64, PersistenceError>;
}

/// Persistence error; recoverable, surfaced to the caller without retry
#[derive(Debug, Clone, thiserror::Error)]
pub enum PersistenceError {
    /// The write was rejected by the store
    #[error("write failed: {0}")]
    WriteFailed(String),
    /// The store could not be reached
    #[error("connection error: {0}")]
    Connection(String),
    /// A stored document could not be decoded
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Reverse-geocoding port
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Resolve a coordinate pair to an address breakdown
    async fn reverse_geocode(&self, point: GeoPoint) -> Result<GeocodeResult, LookupError>;
}

/// Reverse-geocode lookup error; aborts enrichment, never the process
#[derive(Debug, Clone, thiserror::Error)]
pub enum LookupError {
    /// The endpoint answered with a non-success status
    #[error("lookup failed with HTTP status {0}")]
    Status(u16),
    /// The endpoint answered but the result set was empty
    #[error("no geocoding result for the given coordinates")]
    NoResults,
    /// The request could not be completed
    #[error("lookup transport error: {0}")]
    Transport(String),
}

/// A local notification to schedule after a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    /// Delay before delivery
    pub after: Duration,
}

/// Notification scheduling port. Best effort: the pipeline logs and
/// ignores failures, it never rolls back a persisted record.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn schedule(&self, notification: Notification) -> Result<(), NotifyError>;
}

/// Notification scheduling error
#[derive(Debug, Clone, thiserror::Error)]
#[error("notification scheduling failed: {0}")]
pub struct NotifyError(pub String);

/// A user created by the authentication service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    /// Externally issued identifier
    pub uid: String,
    pub email: Email,
    pub email_verified: bool,
}

/// An authenticated session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub uid: String,
    pub token: String,
}

/// Authentication port: email/password sign-up, sign-in, sign-out, and
/// email-verification dispatch.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Create an account, returning the issued uid
    async fn sign_up(&self, email: &Email, password: &Password) -> Result<AuthUser, AuthError>;

    /// Sign in with email and password
    async fn sign_in(&self, email: &Email, password: &str) -> Result<AuthSession, AuthError>;

    /// Invalidate the session for a uid
    async fn sign_out(&self, uid: &str) -> Result<(), AuthError>;

    /// Dispatch an email-verification message
    async fn send_verification(&self, uid: &str) -> Result<(), AuthError>;

    /// Whether the account's email has been verified
    async fn is_verified(&self, uid: &str) -> Result<bool, AuthError>;
}

/// Authentication error; surfaced as inline text, never fatal
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthError {
    /// An account already exists for this email
    #[error("an account already exists for this email")]
    EmailInUse,
    /// Email or password did not match
    #[error("please check your email and password are entered correctly")]
    InvalidCredentials,
    /// No account for the given uid
    #[error("unknown account")]
    UnknownAccount,
    /// The auth service could not be reached
    #[error("auth service error: {0}")]
    Service(String),
}
