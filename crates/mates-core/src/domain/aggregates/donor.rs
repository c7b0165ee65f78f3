//! Donor Profile Aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Email, Location, PhoneNumber};

/// A registered donor. Keyed in the user collection by the auth-issued
/// uid; the sequential numeric id lives inside the document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DonorProfile {
    /// Sequential numeric id
    pub id: u64,
    /// Auth-issued uid, the document key
    pub uid: String,
    pub full_name: String,
    pub email: Email,
    pub phone_number: PhoneNumber,
    pub blood_type: String,
    pub location: Location,
    pub hospital: String,
    /// Date of birth as entered (DD/MM/YYYY)
    pub date_of_birth: String,
    /// Optional; empty when the donor has not donated before
    #[serde(default)]
    pub last_donation_date: String,
    pub created_at: DateTime<Utc>,
}

impl DonorProfile {
    /// Create a profile record at registration time
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        id: u64,
        uid: impl Into<String>,
        full_name: impl Into<String>,
        email: Email,
        phone_number: PhoneNumber,
        blood_type: impl Into<String>,
        location: Location,
        hospital: impl Into<String>,
        date_of_birth: impl Into<String>,
        last_donation_date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            uid: uid.into(),
            full_name: full_name.into(),
            email,
            phone_number,
            blood_type: blood_type.into(),
            location,
            hospital: hospital.into(),
            date_of_birth: date_of_birth.into(),
            last_donation_date: last_donation_date.into(),
            created_at: Utc::now(),
        }
    }

    /// Case-insensitive match against a donor-search query, over name,
    /// blood type, and formatted location.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.full_name.to_lowercase().contains(&query)
            || self.blood_type.to_lowercase().contains(&query)
            || self.location.formatted.to_lowercase().contains(&query)
    }
}
