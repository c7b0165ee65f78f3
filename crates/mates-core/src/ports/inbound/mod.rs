//! Inbound ports
//!
//! Application service interfaces and the submission error taxonomy.

use async_trait::async_trait;

use crate::application::dto::{
    CampaignCard, CampaignSubmission, DonorCard, DonorRegistration, RequestCard,
    RequestSubmission,
};
use crate::domain::aggregates::{Campaign, DonationRequest, DonorProfile};
use crate::ports::outbound::{AuthError, AuthSession, LookupError, PersistenceError};

/// Submission use cases: the validate → enrich → allocate → persist →
/// notify pipeline for each form.
#[async_trait]
pub trait SubmissionUseCases: Send + Sync {
    /// Submit a donation request
    async fn submit_request(
        &self,
        submission: RequestSubmission,
    ) -> Result<DonationRequest, SubmissionError>;

    /// Schedule a donation campaign
    async fn schedule_campaign(
        &self,
        submission: CampaignSubmission,
    ) -> Result<Campaign, SubmissionError>;

    /// Register a donor: auth sign-up, verification dispatch, profile
    /// persistence.
    async fn register_donor(
        &self,
        registration: DonorRegistration,
    ) -> Result<DonorProfile, SubmissionError>;

    /// Sign in an existing donor
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, SubmissionError>;
}

/// Directory use cases: listings and donor search
#[async_trait]
pub trait DirectoryUseCases: Send + Sync {
    /// Donation requests as card views, newest first
    async fn list_requests(&self) -> Result<Vec<RequestCard>, SubmissionError>;

    /// One donation request by its sequential id
    async fn find_request(&self, id: u64) -> Result<Option<RequestCard>, SubmissionError>;

    /// Campaigns as card views
    async fn list_campaigns(&self) -> Result<Vec<CampaignCard>, SubmissionError>;

    /// One campaign by its sequential id
    async fn find_campaign(&self, id: u64) -> Result<Option<CampaignCard>, SubmissionError>;

    /// Donors matching a query over name, blood type, and location;
    /// an empty query returns everyone.
    async fn search_donors(&self, query: &str) -> Result<Vec<DonorCard>, SubmissionError>;
}

/// Failure of a submission. Every variant is recoverable: the caller's
/// form state is untouched and nothing partial is visible.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmissionError {
    /// A joint or per-field constraint was not met; no write occurred
    #[error("validation error: {0}")]
    Validation(String),
    /// Geocode enrichment failed; the pipeline aborted before allocation
    #[error(transparent)]
    Lookup(#[from] LookupError),
    /// The store rejected the write
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    /// Sign-up or sign-in failed
    #[error(transparent)]
    Auth(#[from] AuthError),
}
