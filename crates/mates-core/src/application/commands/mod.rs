//! Submission pipeline
//!
//! One service orchestrating every form submission:
//! validate-all → enrich (geolocation-bearing forms only) → allocate id →
//! persist → best-effort notify. Any failure returns the caller's form to
//! its prior state; nothing is partially visible.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::application::dto::{CampaignSubmission, DonorRegistration, RequestSubmission};
use crate::domain::aggregates::{Campaign, DonationRequest, DonorProfile};
use crate::domain::value_objects::{Email, GeoPoint, Location, Password, PhoneNumber};
use crate::infrastructure::sequence::{Collection, SequenceAllocator};
use crate::ports::inbound::{SubmissionError, SubmissionUseCases};
use crate::ports::outbound::{
    AuthPort, AuthSession, CampaignRepository, DonorRepository, Notification, Notifier,
    RequestRepository, ReverseGeocoder,
};

/// Notification shown after a request is persisted
const REQUEST_NOTIFICATION_TITLE: &str = "Donate Blood";
const REQUEST_NOTIFICATION_BODY: &str = "Someone needs your blood";

/// Submission application service
pub struct SubmissionService {
    requests: Arc<dyn RequestRepository>,
    campaigns: Arc<dyn CampaignRepository>,
    donors: Arc<dyn DonorRepository>,
    geocoder: Arc<dyn ReverseGeocoder>,
    auth: Arc<dyn AuthPort>,
    notifier: Arc<dyn Notifier>,
    allocator: Arc<SequenceAllocator>,
}

impl SubmissionService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        requests: Arc<dyn RequestRepository>,
        campaigns: Arc<dyn CampaignRepository>,
        donors: Arc<dyn DonorRepository>,
        geocoder: Arc<dyn ReverseGeocoder>,
        auth: Arc<dyn AuthPort>,
        notifier: Arc<dyn Notifier>,
        allocator: Arc<SequenceAllocator>,
    ) -> Self {
        Self {
            requests,
            campaigns,
            donors,
            geocoder,
            auth,
            notifier,
            allocator,
        }
    }

    /// Resolve a location from an optional device fix plus the typed
    /// fallback text. Enrichment failures abort the pipeline before any
    /// id is allocated.
    async fn resolve_location(
        &self,
        coordinates: Option<GeoPoint>,
        typed: &str,
    ) -> Result<Location, SubmissionError> {
        match coordinates {
            Some(point) => {
                debug!(lat = point.latitude, lon = point.longitude, "enriching location");
                let geocode = self.geocoder.reverse_geocode(point).await?;
                Ok(Location::from_geocode(point, &geocode))
            }
            None => Ok(Location::manual(typed)),
        }
    }
}

#[async_trait]
impl SubmissionUseCases for SubmissionService {
    async fn submit_request(
        &self,
        submission: RequestSubmission,
    ) -> Result<DonationRequest, SubmissionError> {
        // Validating: joint constraints beyond the per-keystroke rules
        if submission.city.is_empty()
            || submission.hospital.is_empty()
            || submission.blood_type.is_empty()
            || submission.mobile.is_empty()
        {
            return Err(SubmissionError::Validation(
                "all fields except the note are required".into(),
            ));
        }
        let mobile = PhoneNumber::new(&submission.mobile)
            .map_err(|e| SubmissionError::Validation(e.to_string()))?;

        // Enriching
        let location = self
            .resolve_location(submission.coordinates, &submission.city)
            .await?;

        // Allocating
        let id = self.allocator.next_id(Collection::DonationRequests);

        // Persisting
        let request = DonationRequest::create(
            id,
            submission.full_name,
            submission.hospital,
            submission.blood_type,
            mobile,
            submission.note,
            location,
        );
        self.requests.save(&request).await?;
        debug!(id, "donation request persisted");

        // Best effort; a scheduling failure never rolls back the write
        let notification = Notification {
            title: REQUEST_NOTIFICATION_TITLE.into(),
            body: REQUEST_NOTIFICATION_BODY.into(),
            after: Duration::from_secs(1),
        };
        if let Err(e) = self.notifier.schedule(notification).await {
            warn!(error = %e, "request notification not scheduled");
        }

        Ok(request)
    }

    async fn schedule_campaign(
        &self,
        submission: CampaignSubmission,
    ) -> Result<Campaign, SubmissionError> {
        if submission.organizer_name.is_empty()
            || submission.organization_name.is_empty()
            || submission.address.is_empty()
            || submission.donation_date.is_empty()
        {
            return Err(SubmissionError::Validation(
                "all fields except the note are required".into(),
            ));
        }
        let phone = PhoneNumber::new(&submission.phone_number)
            .map_err(|e| SubmissionError::Validation(e.to_string()))?;

        let id = self.allocator.next_id(Collection::Campaigns);

        let campaign = Campaign::create(
            id,
            submission.organizer_name,
            submission.organization_name,
            submission.address,
            submission.donation_date,
            phone,
            submission.note,
        );
        self.campaigns.save(&campaign).await?;
        debug!(id, "campaign persisted");

        Ok(campaign)
    }

    async fn register_donor(
        &self,
        registration: DonorRegistration,
    ) -> Result<DonorProfile, SubmissionError> {
        if !registration.declaration_accepted {
            return Err(SubmissionError::Validation(
                "please accept the condition".into(),
            ));
        }
        let email = Email::new(&registration.email)
            .map_err(|e| SubmissionError::Validation(e.to_string()))?;
        let password = Password::new(&registration.password)
            .map_err(|e| SubmissionError::Validation(e.to_string()))?;
        let phone = PhoneNumber::new(&registration.phone_number)
            .map_err(|e| SubmissionError::Validation(e.to_string()))?;
        if registration.full_name.is_empty()
            || registration.blood_type.is_empty()
            || registration.hospital.is_empty()
            || registration.date_of_birth.is_empty()
        {
            return Err(SubmissionError::Validation(
                "all fields except the last donation date are required".into(),
            ));
        }

        let location = self
            .resolve_location(registration.coordinates, &registration.location)
            .await?;

        let user = self.auth.sign_up(&email, &password).await?;
        if let Err(e) = self.auth.send_verification(&user.uid).await {
            // The account exists; verification can be re-sent later
            warn!(uid = %user.uid, error = %e, "verification mail not dispatched");
        }

        let id = self.allocator.next_id(Collection::Users);

        let donor = DonorProfile::create(
            id,
            user.uid,
            registration.full_name,
            email,
            phone,
            registration.blood_type,
            location,
            registration.hospital,
            registration.date_of_birth,
            registration.last_donation_date,
        );
        self.donors.save(&donor).await?;
        debug!(id, uid = %donor.uid, "donor profile persisted");

        Ok(donor)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, SubmissionError> {
        let email =
            Email::new(email).map_err(|e| SubmissionError::Validation(e.to_string()))?;
        Ok(self.auth.sign_in(&email, password).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::GeocodeResult;
    use crate::infrastructure::auth::InMemoryAuth;
    use crate::infrastructure::persistence::{
        InMemoryCampaignRepository, InMemoryDonorRepository, InMemoryRequestRepository,
    };
    use crate::ports::outbound::{LookupError, NotifyError, PersistenceError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Geocoder stub with a scripted outcome
    struct StubGeocoder {
        outcome: Result<GeocodeResult, LookupError>,
        calls: AtomicUsize,
    }

    impl StubGeocoder {
        fn ok() -> Self {
            Self {
                outcome: Ok(GeocodeResult {
                    county: "Kanchipuram".into(),
                    city: "Chennai".into(),
                    state_district: "Chennai District".into(),
                    state: "Tamil Nadu".into(),
                    postcode: "600044".into(),
                }),
                calls: AtomicUsize::new(0),
            }
        }

        fn empty() -> Self {
            Self {
                outcome: Err(LookupError::NoResults),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ReverseGeocoder for StubGeocoder {
        async fn reverse_geocode(&self, _point: GeoPoint) -> Result<GeocodeResult, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    /// Notifier recording scheduled notifications, optionally failing
    struct RecordingNotifier {
        fail: bool,
        scheduled: AtomicUsize,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn schedule(&self, _notification: Notification) -> Result<(), NotifyError> {
            self.scheduled.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(NotifyError("channel closed".into()))
            } else {
                Ok(())
            }
        }
    }

    /// Request store whose writes are always rejected
    struct RejectingRequestRepository;

    #[async_trait]
    impl RequestRepository for RejectingRequestRepository {
        async fn find_by_id(
            &self,
            _id: u64,
        ) -> Result<Option<DonationRequest>, PersistenceError> {
            Ok(None)
        }

        async fn list(&self) -> Result<Vec<DonationRequest>, PersistenceError> {
            Ok(Vec::new())
        }

        async fn save(&self, _request: &DonationRequest) -> Result<(), PersistenceError> {
            Err(PersistenceError::WriteFailed("store rejected the document".into()))
        }

        async fn count(&self) -> Result<u64, PersistenceError> {
            Ok(0)
        }
    }

    struct Harness {
        service: SubmissionService,
        requests: Arc<InMemoryRequestRepository>,
    }

    fn harness_with(geocoder: StubGeocoder, notifier_fails: bool) -> Harness {
        let requests = Arc::new(InMemoryRequestRepository::new());
        let service = SubmissionService::new(
            requests.clone(),
            Arc::new(InMemoryCampaignRepository::new()),
            Arc::new(InMemoryDonorRepository::new()),
            Arc::new(geocoder),
            Arc::new(InMemoryAuth::new()),
            Arc::new(RecordingNotifier {
                fail: notifier_fails,
                scheduled: AtomicUsize::new(0),
            }),
            Arc::new(SequenceAllocator::new()),
        );
        Harness { service, requests }
    }

    fn valid_request() -> RequestSubmission {
        RequestSubmission {
            full_name: "Jane Doe".into(),
            city: "Chennai".into(),
            hospital: "City Hospital".into(),
            blood_type: "O positive".into(),
            mobile: "9876543210".into(),
            note: String::new(),
            coordinates: None,
        }
    }

    #[tokio::test]
    async fn test_non_digit_mobile_rejected_without_write() {
        let h = harness_with(StubGeocoder::ok(), false);
        let mut submission = valid_request();
        submission.mobile = "12a45".into();

        let err = h.service.submit_request(submission).await.unwrap_err();
        assert!(matches!(err, SubmissionError::Validation(_)));
        assert_eq!(h.requests.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_allocates_size_plus_one() {
        let h = harness_with(StubGeocoder::ok(), false);
        // Four existing records
        for _ in 0..4 {
            h.service.submit_request(valid_request()).await.unwrap();
        }
        assert_eq!(h.requests.count().await.unwrap(), 4);

        let fifth = h.service.submit_request(valid_request()).await.unwrap();
        assert_eq!(fifth.id, 5);
        assert!(h.requests.find_by_id(5).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_empty_geocode_aborts_without_write() {
        let h = harness_with(StubGeocoder::empty(), false);
        let mut submission = valid_request();
        submission.coordinates = Some(GeoPoint::new(12.92, 80.1));

        let err = h.service.submit_request(submission).await.unwrap_err();
        assert!(matches!(err, SubmissionError::Lookup(LookupError::NoResults)));
        assert_eq!(h.requests.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_enriched_location_is_stored() {
        let h = harness_with(StubGeocoder::ok(), false);
        let mut submission = valid_request();
        submission.coordinates = Some(GeoPoint::new(12.92, 80.1));

        let request = h.service.submit_request(submission).await.unwrap();
        assert_eq!(
            request.location.formatted,
            "Kanchipuram, Chennai, Chennai District, Tamil Nadu, 600044"
        );
        assert!(request.location.point.is_some());
    }

    #[tokio::test]
    async fn test_rejected_write_surfaces_persistence_error() {
        let service = SubmissionService::new(
            Arc::new(RejectingRequestRepository),
            Arc::new(InMemoryCampaignRepository::new()),
            Arc::new(InMemoryDonorRepository::new()),
            Arc::new(StubGeocoder::ok()),
            Arc::new(InMemoryAuth::new()),
            Arc::new(RecordingNotifier {
                fail: false,
                scheduled: AtomicUsize::new(0),
            }),
            Arc::new(SequenceAllocator::new()),
        );

        let err = service.submit_request(valid_request()).await.unwrap_err();
        assert!(matches!(err, SubmissionError::Persistence(_)));
    }

    #[tokio::test]
    async fn test_notifier_failure_does_not_roll_back() {
        let h = harness_with(StubGeocoder::ok(), true);
        let request = h.service.submit_request(valid_request()).await.unwrap();
        assert!(h.requests.find_by_id(request.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_registration_requires_declaration() {
        let h = harness_with(StubGeocoder::ok(), false);
        let registration = DonorRegistration {
            email: "jane@example.com".into(),
            password: "secret1".into(),
            full_name: "Jane Doe".into(),
            phone_number: "9876543210".into(),
            blood_type: "O positive".into(),
            location: "Chennai".into(),
            hospital: "City Hospital".into(),
            date_of_birth: "01/01/1990".into(),
            last_donation_date: String::new(),
            coordinates: None,
            declaration_accepted: false,
        };
        let err = h.service.register_donor(registration).await.unwrap_err();
        assert!(matches!(err, SubmissionError::Validation(_)));
    }

    #[tokio::test]
    async fn test_duplicate_registration_is_auth_error() {
        let h = harness_with(StubGeocoder::ok(), false);
        let registration = DonorRegistration {
            email: "jane@example.com".into(),
            password: "secret1".into(),
            full_name: "Jane Doe".into(),
            phone_number: "9876543210".into(),
            blood_type: "O positive".into(),
            location: "Chennai".into(),
            hospital: "City Hospital".into(),
            date_of_birth: "01/01/1990".into(),
            last_donation_date: String::new(),
            coordinates: None,
            declaration_accepted: true,
        };
        h.service.register_donor(registration.clone()).await.unwrap();
        let err = h.service.register_donor(registration).await.unwrap_err();
        assert!(matches!(err, SubmissionError::Auth(_)));
    }

    #[tokio::test]
    async fn test_campaign_submission_persists_with_next_id() {
        let h = harness_with(StubGeocoder::ok(), false);
        let campaign = h
            .service
            .schedule_campaign(CampaignSubmission {
                organizer_name: "Arun Kumar".into(),
                organization_name: "Red Crescent".into(),
                address: "12, Beach Road, Chennai".into(),
                donation_date: "12 October 2024".into(),
                phone_number: "9876543210".into(),
                note: String::new(),
            })
            .await
            .unwrap();
        assert_eq!(campaign.id, 1);
    }
}
