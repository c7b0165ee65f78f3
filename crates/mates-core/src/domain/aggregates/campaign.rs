//! Campaign Aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::PhoneNumber;

/// A scheduled donation campaign, keyed by its sequential id
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: u64,
    pub organizer_name: String,
    pub organization_name: String,
    pub address: String,
    /// Free-form date string as entered in the form
    pub donation_date: String,
    pub phone_number: PhoneNumber,
    #[serde(default)]
    pub note: String,
    pub timestamp: DateTime<Utc>,
}

impl Campaign {
    /// Create a campaign record at submission time
    pub fn create(
        id: u64,
        organizer_name: impl Into<String>,
        organization_name: impl Into<String>,
        address: impl Into<String>,
        donation_date: impl Into<String>,
        phone_number: PhoneNumber,
        note: impl Into<String>,
    ) -> Self {
        Self {
            id,
            organizer_name: organizer_name.into(),
            organization_name: organization_name.into(),
            address: address.into(),
            donation_date: donation_date.into(),
            phone_number,
            note: note.into(),
            timestamp: Utc::now(),
        }
    }

    /// The document key in the campaign collection
    pub fn doc_key(&self) -> String {
        self.id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_round_trip() {
        let campaign = Campaign::create(
            1,
            "Arun Kumar",
            "Red Crescent",
            "12, Beach Road, Chennai",
            "12 October 2024",
            PhoneNumber::new("9876543210").unwrap(),
            "",
        );
        let json = serde_json::to_string(&campaign).unwrap();
        let back: Campaign = serde_json::from_str(&json).unwrap();
        assert_eq!(back, campaign);
    }
}
