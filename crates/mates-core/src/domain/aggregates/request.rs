//! Donation Request Aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Location, PhoneNumber};

/// A posted request for blood, keyed by its sequential id
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DonationRequest {
    pub id: u64,
    pub full_name: String,
    pub hospital: String,
    pub blood_type: String,
    pub mobile: PhoneNumber,
    /// Optional note; defaults to the empty string, never absent
    #[serde(default)]
    pub note: String,
    pub location: Location,
    pub timestamp: DateTime<Utc>,
}

impl DonationRequest {
    /// Create a request record at submission time
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        id: u64,
        full_name: impl Into<String>,
        hospital: impl Into<String>,
        blood_type: impl Into<String>,
        mobile: PhoneNumber,
        note: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            hospital: hospital.into(),
            blood_type: blood_type.into(),
            mobile,
            note: note.into(),
            location,
            timestamp: Utc::now(),
        }
    }

    /// The document key in the request collection
    pub fn doc_key(&self) -> String {
        self.id.to_string()
    }
}
