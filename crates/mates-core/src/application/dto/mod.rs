//! Application DTOs
//!
//! Commands carried into the pipeline and card views carried out of the
//! directory queries.

use chrono::{DateTime, Utc};
use chrono_humanize::HumanTime;
use serde::{Deserialize, Serialize};

use crate::domain::aggregates::{Campaign, DonationRequest, DonorProfile};
use crate::domain::value_objects::GeoPoint;

/// Donation-request form contents at submission time
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RequestSubmission {
    pub full_name: String,
    /// Free-text city, used verbatim when no coordinates were captured
    pub city: String,
    pub hospital: String,
    pub blood_type: String,
    pub mobile: String,
    #[serde(default)]
    pub note: String,
    /// Device fix, present when the requester used current-location
    #[serde(default)]
    pub coordinates: Option<GeoPoint>,
}

/// Campaign form contents at submission time
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CampaignSubmission {
    pub organizer_name: String,
    pub organization_name: String,
    pub address: String,
    pub donation_date: String,
    pub phone_number: String,
    #[serde(default)]
    pub note: String,
}

/// Registration form contents plus the fitness declaration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DonorRegistration {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone_number: String,
    pub blood_type: String,
    /// Free-text location, used verbatim when no coordinates were captured
    pub location: String,
    pub hospital: String,
    pub date_of_birth: String,
    #[serde(default)]
    pub last_donation_date: String,
    #[serde(default)]
    pub coordinates: Option<GeoPoint>,
    /// "I hereby declare that I am physically fit" checkbox
    pub declaration_accepted: bool,
}

/// Donation request as shown on the request feed
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RequestCard {
    pub id: u64,
    pub name: String,
    /// The hospital is what the feed shows as the request's place
    pub location: String,
    /// Human-relative age, e.g. "5 minutes ago"
    pub posted: String,
    pub timestamp: DateTime<Utc>,
    pub blood_type: String,
    pub mobile: String,
}

impl RequestCard {
    /// Project a stored request into its feed view
    pub fn from_record(request: &DonationRequest) -> Self {
        Self {
            id: request.id,
            name: request.full_name.clone(),
            location: request.hospital.clone(),
            posted: humanize(request.timestamp),
            timestamp: request.timestamp,
            blood_type: request.blood_type.clone(),
            mobile: request.mobile.as_str().to_string(),
        }
    }
}

/// Campaign as shown on the campaign list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CampaignCard {
    pub id: u64,
    pub organizer: String,
    pub organization: String,
    pub location: String,
    pub date: String,
    pub mobile: String,
    pub note: String,
}

impl CampaignCard {
    /// Project a stored campaign into its list view
    pub fn from_record(campaign: &Campaign) -> Self {
        Self {
            id: campaign.id,
            organizer: campaign.organizer_name.clone(),
            organization: campaign.organization_name.clone(),
            location: campaign.address.clone(),
            date: campaign.donation_date.clone(),
            mobile: campaign.phone_number.as_str().to_string(),
            note: campaign.note.clone(),
        }
    }
}

/// Donor as shown on the search map and list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DonorCard {
    pub id: u64,
    pub name: String,
    pub location: String,
    pub blood_type: String,
    pub mobile: String,
    #[serde(default)]
    pub coordinates: Option<GeoPoint>,
}

impl DonorCard {
    /// Project a stored profile into its search view
    pub fn from_record(donor: &DonorProfile) -> Self {
        Self {
            id: donor.id,
            name: donor.full_name.clone(),
            location: donor.location.formatted.clone(),
            blood_type: donor.blood_type.clone(),
            mobile: donor.phone_number.as_str().to_string(),
            coordinates: donor.location.point,
        }
    }
}

fn humanize(timestamp: DateTime<Utc>) -> String {
    HumanTime::from(timestamp).to_string()
}
